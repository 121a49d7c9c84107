//! Search file contents with ripgrep and jump to the chosen hit

use super::{CommandContext, Outcome, enter_directory, select};
use crate::editor::{self, EditorSettings};
use crate::executor;
use crate::parser::{self, MatchRecord};
use crate::pipeline::{RG, grep_stage};
use crate::probe;
use crate::ui::{Host, MessageLevel};

/// Message shown when ripgrep is not installed
pub const RG_MISSING: &str = "ripgrep (rg) not found in PATH";

/// Grep for `pattern`, pick a hit, and open it in the editor at its line
///
/// A picked line that is not a grep record is treated as a path: files
/// are selected, anything else is entered.
pub fn execute<H: Host + ?Sized>(host: &H, ctx: &CommandContext, pattern: &str) -> Outcome {
    if !probe::have(host, RG) {
        host.notify(RG_MISSING, MessageLevel::Error);
        return Outcome::ToolMissing(RG);
    }

    let pipeline = ctx.pipeline(grep_stage(pattern, &ctx.exclusions));
    let selection = executor::run(host, &pipeline);
    let Some(line) = selection.chosen() else {
        return Outcome::NoSelection;
    };

    match parser::parse(line) {
        MatchRecord::Location { path, line, .. } => {
            let settings = EditorSettings::from_lookup(ctx.env, &ctx.fallback_editor);
            Outcome::OpenedEditor(editor::open_at_line(host, &settings, &path, line))
        }
        MatchRecord::Path(path) if path.is_file() => select(host, &path),
        MatchRecord::Path(path) => enter_directory(host, &path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestTree;
    use crate::ui::mock::MockHost;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn helix_env(name: &str) -> Option<String> {
        (name == "VISUAL").then(|| "hx".to_string())
    }

    fn ctx(env: crate::editor::EnvLookup) -> CommandContext {
        CommandContext {
            env,
            fallback_editor: "vim".into(),
            ..CommandContext::default()
        }
    }

    #[test]
    fn test_grep_without_rg_notifies_and_stops() {
        let host = MockHost::with_default_settings();

        let outcome = execute(&host, &ctx(no_env), "todo");

        assert_eq!(outcome, Outcome::ToolMissing("rg"));
        assert_eq!(
            host.notifications.borrow().as_slice(),
            [(RG_MISSING.to_string(), MessageLevel::Error)]
        );
        assert!(!host.ran("fzf"));
        assert_eq!(host.executed.borrow().len(), 1);
        assert!(host.setting_writes.borrow().is_empty());
    }

    #[test]
    fn test_grep_opens_hit_at_line() {
        let host = MockHost::with_default_settings();
        host.respond("command -v rg", 0, "/usr/bin/rg");
        host.respond("rg ", 0, "/a/b/file.txt:42:5:some code\n");

        let outcome = execute(&host, &ctx(no_env), "some");

        let Outcome::OpenedEditor(invocation) = &outcome else {
            panic!("expected editor, got {outcome:?}");
        };
        assert_eq!(invocation.command_line().unwrap(), "vim +42 /a/b/file.txt");
        assert_eq!(host.foreground.borrow().len(), 1);
    }

    #[test]
    fn test_grep_respects_visual() {
        let host = MockHost::new();
        host.respond("command -v rg", 0, "/usr/bin/rg");
        host.respond("rg ", 0, "/tmp/x.go:10:1:func main()");

        let outcome = execute(&host, &ctx(helix_env), "main");

        let Outcome::OpenedEditor(invocation) = &outcome else {
            panic!("expected editor, got {outcome:?}");
        };
        assert_eq!(invocation.command_line().unwrap(), "hx /tmp/x.go:10");
    }

    #[test]
    fn test_grep_pipeline_shape() {
        let host = MockHost::new();
        host.respond("command -v rg", 0, "/usr/bin/rg");

        execute(&host, &ctx(no_env), "");

        let executed = host.executed.borrow();
        let pipeline = &executed[1];
        assert!(pipeline.starts_with("rg --vimgrep --hidden --no-follow --color never --glob"));
        assert!(pipeline.contains(" -- . | fzf "));
        assert!(host.setting_writes.borrow().is_empty());
    }

    #[test]
    fn test_grep_bare_directory_is_entered() {
        let tree = TestTree::new();
        let expected = tree.dir("lib");
        let host = MockHost::new();
        host.respond("command -v rg", 0, "/usr/bin/rg");
        host.respond("rg ", 0, &expected.display().to_string());

        let outcome = execute(&host, &ctx(no_env), "x");

        assert_eq!(outcome, Outcome::ChangedDirectory(expected));
    }

    #[test]
    fn test_grep_bare_file_is_selected() {
        let tree = TestTree::new();
        let expected = tree.file("notes.txt");
        let host = MockHost::new();
        host.respond("command -v rg", 0, "/usr/bin/rg");
        host.respond("rg ", 0, &format!("{}:not-a-record", expected.display()));

        let outcome = execute(&host, &ctx(no_env), "x");

        assert_eq!(outcome, Outcome::SelectedFile(expected));
        assert!(host.foreground.borrow().is_empty());
    }

    #[test]
    fn test_grep_abort_is_noop() {
        let host = MockHost::with_default_settings();
        host.respond("command -v rg", 0, "/usr/bin/rg");
        host.respond("rg ", 1, "");

        assert_eq!(execute(&host, &ctx(no_env), "x"), Outcome::NoSelection);
        assert!(host.foreground.borrow().is_empty());
        assert!(host.notifications.borrow().is_empty());
    }
}
