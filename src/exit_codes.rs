//! Exit code constants for the mtgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing files or directories)
//! - 2: Input document error (malformed YAML or missing event field)
//! - 3: Template fetch failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, settings, or a missing input path or output directory.
pub const USER_ERROR: i32 = 1;

/// Event document could not be parsed or lacks a required field.
pub const INPUT_ERROR: i32 = 2;

/// Template could not be fetched (remote failure after retries).
pub const FETCH_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, INPUT_ERROR, FETCH_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
