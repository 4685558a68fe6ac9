//! Startup banner.

use crate::consts::{AUTHOR, REPO};

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub engines: &'a [&'a str],
    pub model: &'a str,
    pub auth_status: &'a str,
}

/// Render the banner text.
pub fn banner(info: &BannerInfo) -> String {
    format!(
        r#"
   Multi-AI Engine is ready!

   version   {}
   by        {}
   repo      {}
   engines   {}
   model     {}
   auth      {}
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.engines.join(", "),
        info.model,
        info.auth_status,
    )
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner(info));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info<'a>(engines: &'a [&'a str]) -> BannerInfo<'a> {
        BannerInfo {
            engines,
            model: "gpt-4o-mini",
            auth_status: "API key (env) ✓",
        }
    }

    #[test]
    fn banner_lists_engines() {
        let text = banner(&info(&["openai", "dummy"]));
        assert!(text.contains("engines   openai, dummy"));
        assert!(text.contains("Multi-AI Engine is ready!"));
    }

    #[test]
    fn banner_shows_model_and_auth() {
        let text = banner(&info(&["dummy"]));
        assert!(text.contains("gpt-4o-mini"));
        assert!(text.contains("API key (env) ✓"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn print_banner_does_not_panic() {
        print_banner(&info(&[]));
    }
}
