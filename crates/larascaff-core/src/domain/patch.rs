//! Marker-guarded source patching.
//!
//! A [`SourcePatch`] is a pure `text -> text` transformation over one host
//! file treated as an opaque string. It never parses the source: it looks for
//! a fixed anchor, inserts a fixed block next to it, and refuses to touch
//! anything it cannot confidently match.
//!
//! Two invariants hold for every patch:
//!
//! - **Conservative**: if the anchor is absent the input is returned
//!   untouched ([`PatchOutcome::NoMatch`]); the caller prints an advisory and
//!   tells the operator to patch by hand.
//! - **Idempotent**: each patch carries a guard substring that its own
//!   insertion contains, so re-applying a patch to its own output is a no-op
//!   ([`PatchOutcome::AlreadyPatched`]).

/// Where the insertion lands relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Insert on a new line directly after the line containing the anchor.
    AfterAnchorLine,
    /// Insert before the closing brace of the block opened right after the
    /// anchor (balanced-brace scan, not a parser).
    BeforeBlockClose,
    /// Insert before the last `}` of the whole file. Positional: trailing
    /// content after that brace would be mis-handled, which is an accepted
    /// limitation of the expected single-class file shape.
    BeforeLastBrace,
}

/// A single named patch against one expected file shape.
#[derive(Debug, Clone)]
pub struct SourcePatch {
    /// Substring whose presence means the patch was already applied.
    pub guard: &'static str,
    /// Fixed text shape searched for before inserting.
    pub anchor: &'static str,
    /// Block inserted next to the anchor.
    pub insertion: &'static str,
    pub placement: Placement,
}

/// Result of applying a patch to a source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Anchor found; returns the patched text.
    Patched(String),
    /// Guard already present; input left untouched.
    AlreadyPatched,
    /// Anchor absent; input left untouched.
    NoMatch,
}

impl SourcePatch {
    /// Apply the patch to `input`.
    pub fn apply(&self, input: &str) -> PatchOutcome {
        if input.contains(self.guard) {
            return PatchOutcome::AlreadyPatched;
        }

        let Some(anchor_at) = input.find(self.anchor) else {
            return PatchOutcome::NoMatch;
        };
        let anchor_end = anchor_at + self.anchor.len();

        let insert_at = match self.placement {
            Placement::AfterAnchorLine => match input[anchor_end..].find('\n') {
                Some(nl) => anchor_end + nl + 1,
                // Anchor on the final unterminated line.
                None => input.len(),
            },
            Placement::BeforeBlockClose => match block_close(input, anchor_end) {
                Some(at) => at,
                None => return PatchOutcome::NoMatch,
            },
            Placement::BeforeLastBrace => match input.rfind('}') {
                Some(at) => at,
                None => return PatchOutcome::NoMatch,
            },
        };

        let mut patched = String::with_capacity(input.len() + self.insertion.len());
        patched.push_str(&input[..insert_at]);
        patched.push_str(self.insertion);
        patched.push_str(&input[insert_at..]);
        PatchOutcome::Patched(patched)
    }
}

/// Find the index of the `}` closing the first block opened at or after
/// `from`. Plain brace counting over raw text; string literals containing
/// braces would confuse it, which is acceptable for the framework-generated
/// files these patches target.
fn block_close(input: &str, from: usize) -> Option<usize> {
    let open = input[from..].find('{')? + from;
    let mut depth = 1usize;
    for (i, c) in input[open + 1..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + 1 + i);
                }
            }
            _ => {}
        }
    }
    None
}

// ── Known patches ─────────────────────────────────────────────────────────────

/// Call `$this->registerServiceAndRepositories();` at the end of the
/// `register()` method of `app/Providers/AppServiceProvider.php`.
pub fn register_bindings_call() -> SourcePatch {
    SourcePatch {
        guard: "$this->registerServiceAndRepositories();",
        anchor: "public function register(): void",
        insertion: "    $this->registerServiceAndRepositories();\n    ",
        placement: Placement::BeforeBlockClose,
    }
}

/// Append the empty `registerServiceAndRepositories()` binding method before
/// the provider class's final closing brace.
pub fn binding_methods_block() -> SourcePatch {
    SourcePatch {
        guard: "function registerServiceAndRepositories",
        anchor: "}",
        insertion: "\n    /**\n     * Register service and repository bindings\n     */\n    protected function registerServiceAndRepositories(): void\n    {\n    }\n",
        placement: Placement::BeforeLastBrace,
    }
}

/// Register `routes/api.php` inside `->withRouting(...)` of
/// `bootstrap/app.php`, directly under the web routes line.
pub fn api_route_registration() -> SourcePatch {
    SourcePatch {
        guard: "api: __DIR__.'/../routes/api.php',",
        anchor: "web: __DIR__.'/../routes/web.php',",
        insertion: "        api: __DIR__.'/../routes/api.php',\n",
        placement: Placement::AfterAnchorLine,
    }
}
