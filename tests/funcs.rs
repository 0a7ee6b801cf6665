use basics::{
    constants::{BIG, MAX_INT, SMALL},
    funcs::{add, add_v2, need_float, need_int, split, swap},
};

const SAMPLES: &[i64] = &[0, 1, -1, 8, 9, 17, -17, 42, 1000, -1000, i64::MAX, i64::MIN];

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() <= f64::EPSILON * expected.abs().max(1.0),
            "expected {expected}, found {actual}");
}

#[test]
fn add_and_add_v2_agree() {
    for &x in SAMPLES {
        for &y in SAMPLES {
            assert_eq!(add(x, y), x.wrapping_add(y));
            assert_eq!(add_v2(x, y), add(x, y));
        }
    }
    assert_eq!(add(42, 13), 55);
    assert_eq!(add_v2(42, 13), 55);
}

#[test]
fn swap_reverses_pairs() {
    assert_eq!(swap("hello", "world"), ("world", "hello"));
    assert_eq!(swap("", "x"), ("x", ""));
    assert_eq!(swap("", ""), ("", ""));
    assert_eq!(swap("世界", "hi"), ("hi", "世界"));
}

#[test]
fn split_parts_sum_back() {
    for sum in (-2000..=2000).chain(SAMPLES.iter().copied()) {
        let (x, y) = split(sum);
        assert_eq!(x.wrapping_add(y), sum, "split({sum})");
        assert_eq!(x, sum.wrapping_mul(4) / 9, "split({sum})");
    }
}

#[test]
fn split_truncates_toward_zero() {
    assert_eq!(split(17), (7, 10));
    assert_eq!(split(-17), (-7, -10));
    assert_eq!(split(2), (0, 2));
    assert_eq!(split(-2), (0, -2));
}

#[test]
fn need_int_and_need_float() {
    assert_eq!(need_int(2), 21);
    assert_eq!(need_int(0), 1);
    assert_close(need_float(2.0), 0.2);
}

#[test]
fn typed_constants() {
    assert_eq!(u128::from(MAX_INT), (1_u128 << 64) - 1);
    assert_eq!(MAX_INT, u64::MAX);
    assert_eq!(BIG, 2_u128.pow(100));
    assert_eq!(SMALL, 2);
    assert_eq!(need_int(SMALL), 21);
    assert_close(need_float(2.0_f64), 0.2);
}

#[test]
fn max_int_wraps_when_incremented() {
    assert_eq!(MAX_INT.wrapping_add(1), 0);
}
