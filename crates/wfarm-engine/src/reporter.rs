//! Status reporting
//!
//! Pure presentation: localized status lines and the stats summary. A
//! missing profile degrades to fallback values, it never errors. The
//! [`StatusSink`] trait is the only way the loop talks to a frontend.

use wfarm_core::{Language, SessionState};

/// Visual class of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Status,
    Success,
    Error,
}

/// Receiver for loop progress
///
/// Implementations must tolerate being called from inside the loop on every
/// iteration; keep them cheap.
pub trait StatusSink: Send + Sync {
    /// A one-line status message
    fn status(&self, message: &str, kind: StatusKind);

    /// Transient effect fired on each confirmed paint
    fn pulse(&self) {}

    /// The refreshed stats summary, one block per cooldown cycle
    fn stats(&self, summary: &str);
}

/// Waiting line shown when charges are exhausted
///
/// The cooldown is shown in whole seconds, rounded up.
pub fn waiting_message(language: Language, cooldown_ms: u64) -> String {
    let secs = cooldown_ms.div_ceil(1000);
    match language {
        Language::Pt => format!("⌛ Sem cargas. Esperando {}s...", secs),
        Language::En => format!("⌛ No charges. Waiting {}s...", secs),
    }
}

/// Line shown after a confirmed paint
pub fn success_message(language: Language) -> &'static str {
    match language {
        Language::Pt => "✅ Pixel pintado!",
        Language::En => "✅ Pixel painted!",
    }
}

/// Line shown after a rejected or unavailable paint
pub fn failure_message(language: Language) -> &'static str {
    match language {
        Language::Pt => "❌ Falha ao pintar",
        Language::En => "❌ Failed to paint",
    }
}

struct StatsLabels {
    user: &'static str,
    pixels: &'static str,
    charges: &'static str,
    level: &'static str,
}

fn labels(language: Language) -> StatsLabels {
    match language {
        Language::Pt => StatsLabels {
            user: "Usuário",
            pixels: "Pixels",
            charges: "Cargas",
            level: "Level",
        },
        Language::En => StatsLabels {
            user: "User",
            pixels: "Pixels",
            charges: "Charges",
            level: "Level",
        },
    }
}

/// Render the stats summary for the current session
///
/// Fields without data fall back to defaults (unknown user, level 0,
/// 0 px to the next level) rather than erroring.
pub fn render_stats(state: &SessionState) -> String {
    let t = labels(state.language);

    let name = state
        .profile
        .as_ref()
        .filter(|p| !p.name.is_empty())
        .map(|p| p.name.as_str())
        .unwrap_or("unknown");
    let level = state.profile.as_ref().and_then(|p| p.level).unwrap_or(0);
    let next_level_in = state
        .profile
        .as_ref()
        .and_then(|p| p.next_level_in)
        .unwrap_or(0);

    format!(
        "{}: {}\n{}: {}\n{}: {}/{}\n{}: {}\nNext Level In: {} px",
        t.user,
        name,
        t.pixels,
        state.painted_count,
        t.charges,
        state.charges.count,
        state.charges.max,
        t.level,
        level,
        next_level_in,
    )
}
