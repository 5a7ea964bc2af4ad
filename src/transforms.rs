use crate::classes::ClassMapper;
use crate::config::Config;
use crate::diff::{changed_lines, unified_diff};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ICON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<([A-Z][a-zA-Z]+) className="h-\d+ w-\d+[^"]*" />"#).expect("regex compiles")
});
// ASCII digits only: the step count feeds arithmetic.
static FORM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<form([^>]*)className="space-y-([0-9]+)[^"]*""#).expect("regex compiles")
});
static CLASS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"className="([^"]*)""#).expect("regex compiles"));

#[derive(Debug, Clone, Copy)]
pub enum PassKind {
    IconSizing,
    FormSpacing,
    ClassConversion,
}

impl PassKind {
    /// Order in which [`Rewriter::rewrite`] runs the passes.
    pub const ALL: [PassKind; 3] = [
        PassKind::IconSizing,
        PassKind::FormSpacing,
        PassKind::ClassConversion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PassKind::IconSizing => "icon-sizing",
            PassKind::FormSpacing => "form-spacing",
            PassKind::ClassConversion => "class-conversion",
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            PassKind::IconSizing => &*ICON_RE,
            PassKind::FormSpacing => &*FORM_RE,
            PassKind::ClassConversion => &*CLASS_NAME_RE,
        }
    }

    fn replace(&self, caps: &Captures<'_>, cfg: &Config) -> String {
        match self {
            PassKind::IconSizing => {
                let size = &cfg.rewrite.icon_size;
                format!(
                    "<{} style={{{{ width: \"{size}\", height: \"{size}\" }}}} />",
                    &caps[1]
                )
            }
            PassKind::FormSpacing => format!(
                "<form{}style={{{{ display: \"flex\", flexDirection: \"column\", gap: \"{}rem\" }}}}",
                &caps[1],
                scaled_gap(&caps[2], cfg.rewrite.spacing_scale)
            ),
            PassKind::ClassConversion => ClassMapper::new(&cfg.tokens).convert(&caps[1]),
        }
    }

    /// Runs this pass over the whole buffer. Returns the new text and the
    /// number of matches replaced.
    pub fn apply(&self, input: &str, cfg: &Config) -> (String, usize) {
        let mut count = 0;
        let out = self.regex().replace_all(input, |caps: &Captures<'_>| {
            count += 1;
            self.replace(caps, cfg)
        });
        (out.into_owned(), count)
    }
}

/// `f64` display drops a trailing `.0`, so 4 steps at 0.25 render as `1`.
fn scaled_gap(steps: &str, scale: f64) -> f64 {
    let steps = steps
        .bytes()
        .fold(0.0, |acc, digit| acc * 10.0 + f64::from(digit - b'0'));
    steps * scale
}

pub struct Rewriter {
    cfg: Config,
}

impl Rewriter {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();
        for pass in PassKind::ALL {
            let (next, count) = pass.apply(&out, &self.cfg);
            log::debug!("{} pass replaced {count} match(es)", pass.name());
            out = next;
        }
        if log::log_enabled!(log::Level::Debug) {
            let changed = changed_lines(text, &out);
            log::debug!("{changed} line(s) rewritten");
            if changed > 0 {
                log::debug!("changes:\n{}", unified_diff(text, &out));
            }
        }
        out
    }
}
