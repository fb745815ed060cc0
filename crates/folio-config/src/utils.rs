use std::{env, path::PathBuf};

/// Returns `$XDG_CONFIG_HOME`, falling back to `$HOME/.config`.
pub fn xdg_config_home() -> PathBuf {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".config"))
}

fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_env;

    #[test]
    fn test_xdg_config_home_env() {
        with_env(&[("XDG_CONFIG_HOME", Some("/tmp/xdg-config"))], || {
            assert_eq!(xdg_config_home(), PathBuf::from("/tmp/xdg-config"));
        });
    }

    #[test]
    fn test_xdg_config_home_fallback() {
        with_env(
            &[("XDG_CONFIG_HOME", None), ("HOME", Some("/home/folio"))],
            || {
                assert_eq!(xdg_config_home(), PathBuf::from("/home/folio/.config"));
            },
        );
    }
}
