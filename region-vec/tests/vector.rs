use region_vec::{Error, Vector};

#[test]
fn create() {
    let vec = Vector::<u8>::new();
    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
    assert!(vec.max_size() > 0);
    assert!(vec.begin() == vec.end());

    let vec = Vector::<u8>::with_capacity(16).unwrap();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 16);
}

#[test]
fn fill_and_resize() {
    let mut vec = Vector::from_elem(5, 3).unwrap();
    assert_eq!(vec.len(), 5);
    assert!((0..5).all(|i| vec.at(i) == Ok(&3)));

    vec.resize(3, 0).unwrap();
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 5);
    assert_eq!(vec.as_slice(), [3, 3, 3]);

    vec.resize(5, 9).unwrap();
    assert_eq!(vec.as_slice(), [3, 3, 3, 9, 9]);
    let capacity = vec.capacity();
    vec.resize(5, 1).unwrap();
    assert_eq!(vec.as_slice(), [3, 3, 3, 9, 9]);
    assert_eq!(vec.len(), 5);
    assert_eq!(vec.capacity(), capacity);

    vec.resize_with(7, Default::default).unwrap();
    assert_eq!(vec.as_slice(), [3, 3, 3, 9, 9, 0, 0]);
    assert_eq!(vec.capacity(), 10);
}

#[test]
fn empty_access() {
    let mut vec = Vector::new();
    assert_eq!(vec.pop(), Err(Error::Empty));

    vec.push(10).unwrap();
    assert_eq!(vec.back(), Ok(&10));
    assert_eq!(vec.pop(), Ok(10));
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.front(), Err(Error::Empty));
}

#[test]
fn insert_then_erase() {
    let mut vec: Vector<i32> = [1, 2, 3].iter().copied().collect();

    let inserted = vec.insert(0, 99).unwrap();
    assert_eq!(inserted.get(), Some(&99));
    assert_eq!(vec.as_slice(), [99, 1, 2, 3]);

    vec.erase(0).unwrap();
    assert_eq!(vec.as_slice(), [1, 2, 3]);
}

#[test]
fn copies_are_independent() {
    let mut original: Vector<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    let copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.capacity(), 2);

    original[0].push('!');
    assert_eq!(copy.as_slice(), ["a", "b"]);
    assert_ne!(copy, original);

    let mut assigned = Vector::from_elem(10, String::from("x")).unwrap();
    assigned.assign_from(&original).unwrap();
    assert_eq!(assigned, original);
    assert_eq!(assigned.capacity(), 2);

    let mut cloned_into = Vector::new();
    cloned_into.clone_from(&copy);
    assert_eq!(cloned_into, copy);
}

#[test]
fn moves_transfer_the_region() {
    let mut original = Vector::from_elem(3, 7u64).unwrap();
    let address = original.as_ptr();

    let mut moved = original.take();
    assert_eq!(moved.as_ptr(), address);
    assert_eq!(moved.as_slice(), [7, 7, 7]);
    assert_eq!(original.len(), 0);
    assert_eq!(original.capacity(), 0);

    // A moved-from vector is usable again.
    original.push(1).unwrap();
    original.move_from(&mut moved);
    assert_eq!(original.as_ptr(), address);
    assert_eq!(original.len(), 3);
    assert!(moved.is_empty());
}

#[test]
fn swapping() {
    let mut a = Vector::from_elem(2, 'a').unwrap();
    let mut b = Vector::from_elem(5, 'b').unwrap();
    a.swap(&mut b);
    assert_eq!(a.as_slice(), ['b'; 5]);
    assert_eq!(b.as_slice(), ['a'; 2]);
    core::mem::swap(&mut a, &mut b);
    assert_eq!(a.len(), 2);
}

#[test]
fn traversal() {
    let mut vec: Vector<u32> = (0..6).collect();

    let forward: Vec<_> = vec.iter().copied().collect();
    let backward: Vec<_> = vec.iter().rev().copied().collect();
    assert_eq!(forward, [0, 1, 2, 3, 4, 5]);
    assert_eq!(backward, [5, 4, 3, 2, 1, 0]);

    for item in &mut vec {
        *item *= 2;
    }

    let mut cursor = vec.begin();
    let mut seen = 0;
    while cursor != vec.end() {
        assert_eq!(cursor.get(), Some(&(2 * seen)));
        cursor.move_next();
        seen += 1;
    }
    assert_eq!(seen, vec.len() as u32);
    assert_eq!(vec.end() - vec.begin(), 6);

    let owned: Vec<u32> = vec.into_iter().rev().collect();
    assert_eq!(owned, [10, 8, 6, 4, 2, 0]);
}

#[test]
fn cursors_of_distinct_vectors() {
    let a = Vector::<u8>::new();
    let b = Vector::<u8>::new();
    assert!(a.begin() != b.begin());
    assert_eq!(a.begin().partial_cmp(&b.begin()), None);
    assert_eq!(a.begin().partial_cmp(&a.end()), Some(core::cmp::Ordering::Equal));

    let units = Vector::from_elem(3, ()).unwrap();
    let more = Vector::from_elem(3, ()).unwrap();
    assert_eq!(units.end().partial_cmp(&more.end()), None);
    assert!(units.begin() < units.end());
}

#[test]
fn growth_keeps_elements() {
    let mut vec = Vector::new();
    let mut capacities = Vec::new();
    for i in 0..100usize {
        vec.push(i.to_string()).unwrap();
        if capacities.last() != Some(&vec.capacity()) {
            capacities.push(vec.capacity());
        }
    }

    assert_eq!(capacities, [1, 2, 4, 8, 16, 32, 64, 128]);
    assert!(vec.iter().enumerate().all(|(i, s)| *s == i.to_string()));
}

#[test]
fn bounds() {
    let mut vec: Vector<u8> = (0..4).collect();
    assert_eq!(vec.at(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(vec.at_mut(usize::MAX).unwrap_err(), Error::IndexOutOfRange { index: usize::MAX, len: 4 });
    assert_eq!(vec.remove(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
    assert!(vec.insert(5, 0).is_err());
    assert_eq!(vec.as_slice(), [0, 1, 2, 3]);
}

#[test]
fn ordering_and_hash() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let small: Vector<u8> = [1, 2].iter().copied().collect();
    let large: Vector<u8> = [1, 3].iter().copied().collect();
    assert!(small < large);
    assert_eq!(small.cmp(&small.clone()), core::cmp::Ordering::Equal);

    let hash = |vec: &Vector<u8>| {
        let mut hasher = DefaultHasher::new();
        vec.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&small), hash(&small.clone()));
    assert_eq!(format!("{:?}", small), "[1, 2]");
}

#[test]
fn display_errors() {
    assert_eq!(
        Error::IndexOutOfRange { index: 7, len: 2 }.to_string(),
        "index out of range: the index is 7 but the length is 2");
    assert_eq!(Error::Empty.to_string(), "the vector is empty");
    assert_eq!(
        Error::Alloc { capacity: 3 }.to_string(),
        "allocation failed: no region for 3 elements");
}
