use crate::field::{add, neg, reduce, reduce_add, P};

#[test]
fn reduce_identity_below_p() {
    for x in [0, 1, 2, 1000, P - 1] {
        assert_eq!(reduce(x), x);
    }
}

#[test]
fn reduce_wraps_all_ones() {
    assert_eq!(reduce(P), 0);
}

#[test]
fn reduce_add_wraps_once() {
    assert_eq!(reduce_add(P), 0);
    assert_eq!(reduce_add(P - 1), P - 1);
    assert_eq!(reduce_add(2 * (P - 1)), P - 2);
}

#[test]
fn neg_involution() {
    for x in [0, 1, 2, P - 1] {
        assert_eq!(neg(neg(x)), x);
    }
}

#[test]
fn neg_is_additive_inverse() {
    for x in [0, 1, 12345, P - 1] {
        assert_eq!(add(x, neg(x)), 0);
    }
}
