#[macro_export]
macro_rules! assert_f64_approx {
    ($l:expr, $r:expr) => {
        assert!(
            ($l - $r).abs() < 1e-9,
            "assertion failed: {} !~ {}",
            $l,
            $r
        )
    };
    ($l:expr, $r:expr, $msg:expr) => {
        assert!(
            ($l - $r).abs() < 1e-9,
            "assertion failed: {} !~ {}: {}",
            $l,
            $r,
            $msg
        )
    };
}

#[macro_export]
macro_rules! assert_slice_approx {
    ($l:expr, $r:expr) => {
        match (&$l, &$r) {
            (l, r) => {
                let l: &[f64] = l;
                let r: &[f64] = r;
                assert_eq!(l.len(), r.len(), "length mismatch");
                for (idx, (lv, rv)) in l.iter().zip(r.iter()).enumerate() {
                    $crate::assert_f64_approx!(lv, rv, format!("at index {idx}"));
                }
            }
        }
    };
}
