//! The vector behaves like `Vec` under arbitrary sequences of operations.
use proptest::prelude::*;
use region_vec::{Error, Vector};

#[derive(Clone, Debug)]
enum Op {
    Push(u16),
    Pop,
    Insert(usize, u16),
    Remove(usize),
    Resize(usize, u16),
    Truncate(usize),
    Reserve(usize),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (0usize..40, any::<u16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0usize..40).prop_map(Op::Remove),
        1 => (0usize..64, any::<u16>()).prop_map(|(n, v)| Op::Resize(n, v)),
        1 => (0usize..40).prop_map(Op::Truncate),
        1 => (0usize..100).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn behaves_like_vec(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut vec = Vector::new();
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            let capacity = vec.capacity();
            match op {
                Op::Push(v) => {
                    vec.push(v).unwrap();
                    model.push(v);
                }
                Op::Pop => {
                    prop_assert_eq!(vec.pop().ok(), model.pop());
                }
                Op::Insert(i, v) => {
                    let result = vec.insert(i, v).map(|cursor| cursor.index());
                    if i <= model.len() {
                        prop_assert_eq!(result, Ok(i));
                        model.insert(i, v);
                    } else {
                        prop_assert_eq!(result, Err(Error::IndexOutOfRange { index: i, len: model.len() }));
                    }
                }
                Op::Remove(i) => {
                    let expected = if i < model.len() { Some(model.remove(i)) } else { None };
                    prop_assert_eq!(vec.remove(i).ok(), expected);
                }
                Op::Resize(n, v) => {
                    let unchanged = n <= model.len();
                    vec.resize(n, v).unwrap();
                    model.resize(n, v);
                    if unchanged {
                        prop_assert_eq!(vec.capacity(), capacity);
                    }
                }
                Op::Truncate(n) => {
                    vec.truncate(n);
                    model.truncate(n);
                    prop_assert_eq!(vec.capacity(), capacity);
                }
                Op::Reserve(n) => {
                    vec.reserve(n).unwrap();
                    prop_assert_eq!(vec.capacity(), capacity.max(n));
                }
                Op::Clear => {
                    vec.clear();
                    model.clear();
                    prop_assert_eq!(vec.capacity(), capacity);
                }
            }

            prop_assert_eq!(vec.as_slice(), model.as_slice());
            prop_assert!(vec.len() <= vec.capacity());
            prop_assert!(vec.capacity() >= capacity);
        }
    }

    #[test]
    fn resize_to_len_is_noop(items in prop::collection::vec(any::<u32>(), 0..100), fill in any::<u32>()) {
        let mut vec: Vector<u32> = items.iter().copied().collect();
        let capacity = vec.capacity();
        let len = vec.len();

        vec.resize(len, fill).unwrap();
        prop_assert_eq!(vec.len(), len);
        prop_assert_eq!(vec.capacity(), capacity);
        prop_assert_eq!(vec.as_slice(), items.as_slice());
    }

    #[test]
    fn copy_is_equal_and_exact(items in prop::collection::vec(any::<i64>(), 0..100)) {
        let original: Vector<i64> = items.iter().copied().collect();
        let copy = original.try_clone().unwrap();

        prop_assert_eq!(&copy, &original);
        prop_assert_eq!(copy.capacity(), items.len());
        prop_assert_eq!(original.as_slice(), items.as_slice());
    }

    #[test]
    fn move_leaves_empty(items in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut original: Vector<u8> = items.iter().copied().collect();
        let capacity = original.capacity();
        let moved = original.take();

        prop_assert_eq!(moved.as_slice(), items.as_slice());
        prop_assert_eq!(moved.capacity(), capacity);
        prop_assert_eq!(original.len(), 0);
        prop_assert_eq!(original.capacity(), 0);
    }

    #[test]
    fn growth_doubles(count in 1usize..300) {
        let mut vec = Vector::new();
        for i in 0..count {
            let before = vec.capacity();
            vec.push(i).unwrap();
            if before < i + 1 {
                prop_assert_eq!(vec.capacity(), (2 * before).max(1));
            } else {
                prop_assert_eq!(vec.capacity(), before);
            }
        }
        prop_assert_eq!(vec.capacity(), count.next_power_of_two());
    }

    #[test]
    fn cursor_distance(items in prop::collection::vec(any::<u8>(), 0..50), step in 0usize..50) {
        let vec: Vector<u8> = items.iter().copied().collect();
        let begin = vec.begin();
        let end = vec.end();
        prop_assert_eq!(end - begin, items.len() as isize);

        let step = step.min(items.len());
        let cursor = begin + step;
        prop_assert_eq!(cursor.get(), items.get(step));
        prop_assert_eq!(cursor.index(), step);
        prop_assert!(begin <= cursor && cursor <= end);
    }
}
