/// Expand `${VAR}` and `$VAR` references in a configured path.
///
/// Unset variables are left in place untouched so a misconfiguration stays
/// visible in the resulting path and in log output.
pub fn expand_env_vars(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('$') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    let name = &braced[..end];
                    match std::env::var(name) {
                        Ok(val) if !name.is_empty() => result.push_str(&val),
                        _ => {
                            result.push_str("${");
                            result.push_str(name);
                            result.push('}');
                        }
                    }
                    rest = &braced[end + 1..];
                }
                None => {
                    // no closing brace, keep the remainder verbatim
                    result.push('$');
                    rest = after;
                }
            }
            continue;
        }

        let name_len = after
            .bytes()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == b'_')
            .count();
        let name = &after[..name_len];

        match std::env::var(name) {
            Ok(val) if !name.is_empty() => result.push_str(&val),
            _ => {
                result.push('$');
                result.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_dollar_style() {
        env::set_var("RA_RESULTS_TEST_HOME", "/home/user");

        assert_eq!(expand_env_vars("$RA_RESULTS_TEST_HOME"), "/home/user");
        assert_eq!(expand_env_vars("$RA_RESULTS_TEST_HOME/runs"), "/home/user/runs");
        assert_eq!(expand_env_vars("$RA_RESULTS_TEST_HOME-tmp"), "/home/user-tmp");

        env::remove_var("RA_RESULTS_TEST_HOME");
    }

    #[test]
    fn test_brace_style() {
        env::set_var("RA_RESULTS_TEST_SCRATCH", "/scratch");

        assert_eq!(expand_env_vars("${RA_RESULTS_TEST_SCRATCH}/stage"), "/scratch/stage");
        assert_eq!(expand_env_vars("pre-${RA_RESULTS_TEST_SCRATCH}-post"), "pre-/scratch-post");

        env::remove_var("RA_RESULTS_TEST_SCRATCH");
    }

    #[test]
    fn test_unset_variables_are_kept() {
        assert_eq!(expand_env_vars("$RA_RESULTS_TEST_UNSET/x"), "$RA_RESULTS_TEST_UNSET/x");
        assert_eq!(expand_env_vars("${RA_RESULTS_TEST_UNSET}/x"), "${RA_RESULTS_TEST_UNSET}/x");
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(expand_env_vars(""), "");
        assert_eq!(expand_env_vars("$"), "$");
        assert_eq!(expand_env_vars("$$"), "$$");
        assert_eq!(expand_env_vars("${"), "${");
        assert_eq!(expand_env_vars("${incomplete"), "${incomplete");
        assert_eq!(expand_env_vars("/plain/path"), "/plain/path");
    }
}
