use alloc_traits::{NonZeroLayout, RawAlloc};
use static_alloc::Bump;

#[test]
fn homogeneous() {
    let bump = Bump::<[u64; 3]>::uninit();
    let layout = NonZeroLayout::new::<u64>().unwrap();

    let blocks = [
        bump.alloc(layout).unwrap(),
        bump.alloc(layout).unwrap(),
        bump.alloc(layout).unwrap(),
    ];

    for (i, block) in blocks.iter().enumerate() {
        unsafe { block.ptr.cast::<u64>().as_ptr().write(i as u64) };
    }
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(unsafe { *block.ptr.cast::<u64>().as_ptr() }, i as u64);
    }

    assert!(bump.alloc(NonZeroLayout::new::<u8>().unwrap()).is_none());
}

#[test]
fn arrays() {
    let bump = Bump::<[u16; 8]>::uninit();
    assert_eq!((&bump).max_size(), 16);

    let four = NonZeroLayout::array::<u16>(4).unwrap();
    assert!(bump.alloc(four).is_some());
    assert!(bump.alloc(four).is_some());
    assert_eq!(bump.remaining(), 0);
    assert!(bump.alloc(four).is_none());
}

#[test]
fn stack_discipline_reuses() {
    let bump = Bump::<[u32; 4]>::uninit();
    let layout = NonZeroLayout::array::<u32>(4).unwrap();

    // Each round frees the only block, so this never runs out.
    for _ in 0..16 {
        let block = bump.alloc(layout).unwrap();
        unsafe { bump.dealloc(block) };
    }

    assert_eq!(bump.remaining(), 16);
}

#[test]
fn reset() {
    let mut bump = Bump::<[u8; 4]>::uninit();
    let layout = NonZeroLayout::array::<u8>(4).unwrap();

    let _ = bump.alloc(layout).unwrap();
    assert!(bump.alloc(layout).is_none());

    bump.reset();
    assert!(bump.alloc(layout).is_some());
}

#[test]
fn through_reference() {
    fn draw<A: RawAlloc>(alloc: A) -> bool {
        alloc.alloc(NonZeroLayout::new::<u32>().unwrap()).is_some()
    }

    let bump = Bump::<[u32; 1]>::uninit();
    assert!(draw(&bump));
    assert!(!draw(&bump));
}

#[test]
fn seeded_storage() {
    let bump = Bump::new([0xab_u8; 4]);
    let block = bump.alloc(NonZeroLayout::array::<u8>(4).unwrap()).unwrap();
    let bytes = unsafe { core::slice::from_raw_parts(block.ptr.as_ptr(), 4) };
    assert_eq!(bytes, [0xab; 4]);
}
