// Small-buffer behavior observed through the public surface.

use smolfmt::{Buffer, SmallBuf};

#[test]
fn test_promotion_preserves_append_order() {
    let mut buf = SmallBuf::<16>::new();
    let mut expected = Vec::new();
    for chunk in ["alpha ", "beta ", "gamma ", "delta ", "epsilon"] {
        buf.append(chunk.as_bytes());
        expected.extend_from_slice(chunk.as_bytes());
    }
    assert!(buf.spilled());
    assert_eq!(buf.as_slice(), expected.as_slice());
}

#[test]
fn test_byte_at_a_time_promotion() {
    let mut buf = SmallBuf::<4>::new();
    for b in 0..32u8 {
        buf.push(b);
    }
    assert_eq!(buf.len(), 32);
    let collected: Vec<u8> = (0..32).collect();
    assert_eq!(buf.as_slice(), collected.as_slice());
}

#[test]
fn test_take_transfers_heap_block() {
    let mut buf = SmallBuf::<8>::new();
    buf.append(b"grown well past the inline capacity");
    let cap = buf.capacity();
    let moved = buf.take();
    assert_eq!(moved.as_slice(), b"grown well past the inline capacity");
    assert_eq!(moved.capacity(), cap);
    assert_eq!(buf.len(), 0);
    assert!(!buf.spilled());
    assert_eq!(buf.capacity(), 8);
}

#[test]
fn test_take_while_inline_copies() {
    let mut buf = SmallBuf::<32>::new();
    buf.append(b"short");
    let moved = buf.take();
    assert_eq!(moved.as_slice(), b"short");
    assert_eq!(buf.len(), 0);
}

#[test]
fn test_reuse_after_take() {
    let mut buf = SmallBuf::<8>::new();
    buf.append(b"first round goes to the heap");
    let _ = buf.take();
    buf.append(b"second");
    assert_eq!(buf.as_slice(), b"second");
    assert!(!buf.spilled());
}

#[test]
fn test_wipe_then_write() {
    let mut buf = SmallBuf::<8>::new();
    buf.append(b"spilling content here");
    buf.wipe();
    buf.append(b"ok.");
    assert_eq!(buf.as_slice(), b"ok.");
    assert!(!buf.spilled());
}

#[test]
fn test_fill_grows_across_boundary() {
    let mut buf = SmallBuf::<4>::new();
    buf.push(b'x');
    buf.fill(10, b'.');
    assert_eq!(buf.as_slice(), b"x..........");
}

#[test]
fn test_trait_object_surface() {
    let mut buf = SmallBuf::<16>::new();
    {
        let dynamic: &mut dyn Buffer = &mut buf;
        dynamic.push(b'[');
        dynamic.append(b"body");
        dynamic.fill(2, b'!');
        dynamic.reserve_back(8);
        assert_eq!(dynamic.len(), 7);
    }
    assert_eq!(buf.as_slice(), b"[body!!");
}
