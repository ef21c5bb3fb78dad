/// Validates that a numerical value lies in the provided interval,
/// returning an [`Error::Interval`](crate::error::Error::Interval) from the
/// enclosing function if not
///
/// Bounds are inclusive by default; mark the lower bound exclusive with a
/// leading `>` or the upper bound exclusive with a leading `<`.
#[macro_export]
macro_rules! ensure_interval {
    ($var:expr, > $a:expr, $b:expr) => {
        if !($var > $a && $var <= $b) {
            return Err($crate::error::Error::Interval {
                name: stringify!($var),
                value: $var,
                min: $a,
                max: $b,
            });
        }
    };
    ($var:expr, $a:expr, < $b:expr) => {
        if !($var >= $a && $var < $b) {
            return Err($crate::error::Error::Interval {
                name: stringify!($var),
                value: $var,
                min: $a,
                max: $b,
            });
        }
    };
    ($var:expr, $a:expr, $b:expr) => {
        if !($var >= $a && $var <= $b) {
            return Err($crate::error::Error::Interval {
                name: stringify!($var),
                value: $var,
                min: $a,
                max: $b,
            });
        }
    };
}
