use tracing::warn;

/// Marker appended by the register-hint pass.
pub const OPTIMIZED_MARKER: &str = "\n\n// Optimized by AI Compiler 🚀";

/// A pure text-to-text optimization pass.
///
/// Passes carry no compiler semantics and do not validate that the
/// input is source code of any language.
pub trait OptimizerPass: Send + Sync {
    fn name(&self) -> &'static str;

    fn run(&self, source: &str) -> String;
}

/// Rewrites `int` declarations with a `register` storage hint and
/// appends a trailing marker comment.
///
/// The replace is naive textual substitution, not token-aware: it also
/// rewrites `int` inside identifiers such as `point`.
pub struct RegisterHintPass;

impl OptimizerPass for RegisterHintPass {
    fn name(&self) -> &'static str {
        "register-hint"
    }

    fn run(&self, source: &str) -> String {
        let mut optimized = source.replace("int", "register int");
        optimized.push_str(OPTIMIZED_MARKER);
        optimized
    }
}

/// Emits the input lines in reverse order. Involution on the line
/// sequence; the trailing newline, if any, is not preserved.
pub struct LineReversePass;

impl OptimizerPass for LineReversePass {
    fn name(&self) -> &'static str {
        "line-reverse"
    }

    fn run(&self, source: &str) -> String {
        source.lines().rev().collect::<Vec<_>>().join("\n")
    }
}

/// Resolves a configured pass name, falling back to the register-hint
/// pass for unknown values.
pub fn create_pass(pass_name: &str) -> Box<dyn OptimizerPass> {
    match pass_name {
        "line-reverse" => Box::new(LineReversePass),
        "register-hint" => Box::new(RegisterHintPass),
        other => {
            warn!("Unknown optimizer pass '{}', using register-hint", other);
            Box::new(RegisterHintPass)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_hint_rewrites_declarations() {
        let pass = RegisterHintPass;
        let result = pass.run("int x;\nint y;");
        assert!(result.starts_with("register int x;\nregister int y;"));
        assert!(result.ends_with(OPTIMIZED_MARKER));
    }

    #[test]
    fn test_register_hint_is_not_token_aware() {
        let pass = RegisterHintPass;
        // "point" contains "int" and gets rewritten too
        assert_eq!(
            pass.run("point"),
            format!("poregister int{}", OPTIMIZED_MARKER)
        );
    }

    #[test]
    fn test_register_hint_output_never_shrinks() {
        let pass = RegisterHintPass;
        for source in ["", "int", "no matches here", "int point int;\n"] {
            let result = pass.run(source);
            assert!(result.len() >= source.len());
            assert!(result.matches("register int").count() >= source.matches("int").count());
        }
    }

    #[test]
    fn test_register_hint_on_empty_input() {
        let pass = RegisterHintPass;
        assert_eq!(pass.run(""), OPTIMIZED_MARKER);
    }

    #[test]
    fn test_line_reverse_reverses_lines() {
        let pass = LineReversePass;
        assert_eq!(pass.run("a\nb\nc"), "c\nb\na");
    }

    #[test]
    fn test_line_reverse_is_an_involution() {
        let pass = LineReversePass;
        for source in ["", "single", "a\nb\nc", "int x;\nint y;\nreturn;\n"] {
            let lines: Vec<&str> = source.lines().collect();
            let twice = pass.run(&pass.run(source));
            assert_eq!(twice.lines().collect::<Vec<_>>(), lines);
        }
    }

    #[test]
    fn test_create_pass_resolves_names() {
        assert_eq!(create_pass("line-reverse").name(), "line-reverse");
        assert_eq!(create_pass("register-hint").name(), "register-hint");
        assert_eq!(create_pass("definitely-not-a-pass").name(), "register-hint");
    }
}
