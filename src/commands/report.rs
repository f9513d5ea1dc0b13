//! Run a query plan against the loaded graph and print the answers

use tracing::debug;

use crate::commands::dispatch::CommandContext;
use tracequery_core::error::Result;
use tracequery_core::format::render;
use tracequery_core::plan::QueryPlan;

pub fn execute(ctx: &CommandContext, plan: &QueryPlan) -> Result<()> {
    let graph = ctx.load_graph()?;

    let outcomes = plan.run(&graph)?;
    debug!(elapsed = ?ctx.start.elapsed(), queries = outcomes.len(), "run_plan");

    print!("{}", render(&outcomes, ctx.cli.format.into())?);
    Ok(())
}
