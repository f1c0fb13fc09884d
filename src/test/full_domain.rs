use crate::{
    entropy::OsEntropy,
    error::Error,
    eval,
    full_domain::eval_full_domain,
    key::Key,
    keygen::gen_key,
    prg::AesPrg,
};

#[test]
fn full_domain_has_a_single_one() {
    let ctx = AesPrg::new([21u8; 16]);
    let mut entropy = OsEntropy;
    let n = 10;
    let alpha = 123u64;
    let (k0, k1) = gen_key(n, alpha, &ctx, &mut entropy).unwrap();
    let k0 = Key::decode(n, &k0).unwrap();
    let k1 = Key::decode(n, &k1).unwrap();

    let d0 = eval_full_domain(n, &k0, &ctx).unwrap().into_shares(&k0);
    let d1 = eval_full_domain(n, &k1, &ctx).unwrap().into_shares(&k1);

    for x in 0..(1usize << n) {
        let sum = crate::field::add(d0[x], d1[x]);
        if x as u64 == alpha {
            assert_eq!(sum, 1);
        } else {
            assert_eq!(sum, 0);
        }
    }
}

#[test]
fn full_domain_matches_point_eval() {
    let ctx = AesPrg::new([22u8; 16]);
    let mut entropy = OsEntropy;
    let n = 9;
    let (k0, _) = gen_key(n, 17, &ctx, &mut entropy).unwrap();
    let k0 = Key::decode(n, &k0).unwrap();

    let shares = eval_full_domain(n, &k0, &ctx).unwrap().into_shares(&k0);
    for x in 0..(1u64 << n) {
        assert_eq!(
            shares[x as usize],
            eval::eval_point(n, &k0, x, &ctx).unwrap()
        );
    }
}

/// §8 concrete scenario 2: n = 20, alpha = 123456.
#[test]
fn n_equals_20_scenario_two() {
    let ctx = AesPrg::new([24u8; 16]);
    let mut entropy = OsEntropy;
    let n = 20;
    let alpha = 123_456u64;
    let (k0, k1) = gen_key(n, alpha, &ctx, &mut entropy).unwrap();
    let k0 = Key::decode(n, &k0).unwrap();
    let k1 = Key::decode(n, &k1).unwrap();

    let d0 = eval_full_domain(n, &k0, &ctx).unwrap().into_shares(&k0);
    let d1 = eval_full_domain(n, &k1, &ctx).unwrap().into_shares(&k1);

    for x in 0..(1usize << n) {
        let sum = crate::field::add(d0[x], d1[x]);
        let expected = if x as u64 == alpha { 1 } else { 0 };
        assert_eq!(sum, expected, "x = {x}, alpha = {alpha}");
    }
}

#[test]
fn rejects_domain_too_large() {
    let ctx = AesPrg::new([23u8; 16]);
    let mut entropy = OsEntropy;
    let (k0, _) = gen_key(64, 0, &ctx, &mut entropy).unwrap();
    let k0 = Key::decode(64, &k0).unwrap();
    assert!(matches!(
        eval_full_domain(64, &k0, &ctx),
        Err(Error::DomainTooLargeForFullDomain(64))
    ));
}
