//! Fuzzy pick a file or directory below the working directory

use super::{CommandContext, Outcome, enter_directory, select};
use crate::parser;
use crate::pipeline::{EntryKind, FastFinder, finder_stage};
use crate::ui::Host;

/// Pick any entry; enter it if it is a directory, otherwise select it
pub fn execute<H: Host + ?Sized>(host: &H, ctx: &CommandContext) -> Outcome {
    let finder = FastFinder::detect(host);
    let pipeline = ctx.pipeline(finder_stage(&finder, EntryKind::Any, &ctx.exclusions));

    let selection = ctx.run_finder(host, &pipeline);
    let Some(line) = selection.chosen() else {
        return Outcome::NoSelection;
    };

    let path = parser::resolve(line);
    let outcome = if path.is_dir() {
        enter_directory(host, &path)
    } else {
        select(host, &path)
    };
    host.request_redraw();
    outcome
}
