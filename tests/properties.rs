use proptest::prelude::*;
use simple_vec::SimpleVec;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(at, x)| Op::Insert(at, x)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0..48_usize).prop_map(Op::Resize),
        1 => (0..96_usize).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

fn apply(vec: &mut SimpleVec<i32>, model: &mut Vec<i32>, op: Op) {
    match op {
        Op::Push(x) => {
            vec.push(x);
            model.push(x);
        }
        Op::Pop => assert_eq!(vec.try_pop(), model.pop()),
        Op::Insert(at, x) => {
            let at = at % (model.len() + 1);
            vec.insert(at, x);
            model.insert(at, x);
        }
        Op::Erase(at) => {
            if !model.is_empty() {
                let at = at % model.len();
                assert_eq!(vec.erase(at), at);
                model.remove(at);
            }
        }
        Op::Resize(len) => {
            vec.resize(len);
            model.resize(len, 0);
        }
        Op::Reserve(capacity) => {
            let before = vec.capacity();
            vec.reserve(capacity);
            assert_eq!(vec.capacity(), before.max(capacity));
        }
        Op::Clear => {
            let before = vec.capacity();
            vec.clear();
            model.clear();
            assert_eq!(vec.capacity(), before);
        }
    }
}

proptest! {
    #[test]
    fn behaves_like_a_vec(ops in prop::collection::vec(op(), 0..128)) {
        let mut vec = SimpleVec::new();
        let mut model = Vec::new();

        for op in ops {
            apply(&mut vec, &mut model, op);
            prop_assert!(vec.len() <= vec.capacity());
            prop_assert_eq!(vec.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn capacity_never_shrinks(ops in prop::collection::vec(op(), 0..64)) {
        let mut vec = SimpleVec::new();
        let mut model = Vec::new();
        let mut capacity = 0;

        for op in ops {
            apply(&mut vec, &mut model, op);
            prop_assert!(vec.capacity() >= capacity);
            capacity = vec.capacity();
        }
    }

    #[test]
    fn insert_then_erase_restores(
        items in prop::collection::vec(any::<i32>(), 0..32),
        at in any::<usize>(),
        value in any::<i32>(),
    ) {
        let mut vec: SimpleVec<i32> = items.iter().copied().collect();
        let at = at % (items.len() + 1);

        prop_assert_eq!(*vec.insert(at, value), value);
        prop_assert_eq!(vec[at], value);
        vec.erase(at);

        prop_assert_eq!(vec.as_slice(), items.as_slice());
    }

    #[test]
    fn resize_from_empty_is_all_default(len in 0..512_usize) {
        let mut vec = SimpleVec::<u64>::new();
        vec.resize(len);

        prop_assert_eq!(vec.len(), len);
        prop_assert!(vec.iter().all(|&x| x == 0));
    }

    #[test]
    fn ordering_matches_slices(
        a in prop::collection::vec(0..4_i32, 0..6),
        b in prop::collection::vec(0..4_i32, 0..6),
    ) {
        let (va, vb) = (SimpleVec::from(a.clone()), SimpleVec::from(b.clone()));

        prop_assert_eq!(va == vb, a == b);
        prop_assert_eq!(va < vb, a < b);
        prop_assert_eq!(va <= vb, a <= b);
        prop_assert_eq!(va > vb, a > b);
        prop_assert_eq!(va >= vb, a >= b);
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
    }

    #[test]
    fn clone_is_independent(
        items in prop::collection::vec(any::<i32>(), 1..32),
        value in any::<i32>(),
    ) {
        let original: SimpleVec<i32> = items.iter().copied().collect();
        let mut copy = original.clone();
        prop_assert_eq!(copy.capacity(), copy.len());

        copy[0] = copy[0].wrapping_add(1);
        copy.push(value);

        prop_assert_eq!(original.as_slice(), items.as_slice());
    }
}
