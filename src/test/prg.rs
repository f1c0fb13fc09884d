use crate::{
    prg::{g, AesPrg, PrgContext},
    seed,
};

#[test]
fn g_is_deterministic() {
    let ctx = AesPrg::new([7u8; 16]);
    let x = [1u8; 16];
    let a = g(&ctx, x).unwrap();
    let b = g(&ctx, x).unwrap();
    assert_eq!(a, b);
}

#[test]
fn g_children_have_lsb_cleared() {
    let ctx = AesPrg::new([9u8; 16]);
    let (s_l, _, s_r, _) = g(&ctx, [0u8; 16]).unwrap();
    assert!(!seed::lsb(&s_l));
    assert!(!seed::lsb(&s_r));
}

#[test]
fn g_ignores_lsb_of_input() {
    let ctx = AesPrg::new([3u8; 16]);
    let x_clear = [4u8; 16];
    let x_set = seed::set_lsb(x_clear);
    assert_eq!(g(&ctx, x_clear).unwrap(), g(&ctx, x_set).unwrap());
}

#[test]
fn g_left_and_right_children_differ() {
    let ctx = AesPrg::new([11u8; 16]);
    let (s_l, t_l, s_r, t_r) = g(&ctx, [0u8; 16]).unwrap();
    assert!(s_l != s_r || t_l != t_r);
}

#[test]
fn aes_prg_matches_fips197_test_vector() {
    let key: [u8; 16] = hex::decode("000102030405060708090a0b0c0d0e0f")
        .unwrap()
        .try_into()
        .unwrap();
    let plaintext = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let expected = hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap();

    let ctx = AesPrg::new(key);
    let mut out = [0u8; 16];
    ctx.encrypt(&plaintext, &mut out).unwrap();
    assert_eq!(out, expected.as_slice());
}
