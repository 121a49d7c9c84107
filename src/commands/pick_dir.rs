//! Fuzzy jump to a directory below the working directory

use super::{CommandContext, Outcome, enter_directory};
use crate::parser;
use crate::pipeline::{EntryKind, FastFinder, finder_stage};
use crate::ui::Host;

/// Pick a directory and enter it
pub fn execute<H: Host + ?Sized>(host: &H, ctx: &CommandContext) -> Outcome {
    let finder = FastFinder::detect(host);
    let pipeline = ctx.pipeline(finder_stage(
        &finder,
        EntryKind::Directories,
        &ctx.exclusions,
    ));

    let selection = ctx.run_finder(host, &pipeline);
    let Some(line) = selection.chosen() else {
        return Outcome::NoSelection;
    };

    let outcome = enter_directory(host, &parser::resolve(line));
    host.request_redraw();
    outcome
}
