//! Command implementations for all tracequery commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::report;
use tracequery_core::error::Result;
use tracequery_core::graph::parse_route;
use tracequery_core::plan::{Query, QueryPlan};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Report { plan } => {
                let plan = match plan {
                    Some(path) => QueryPlan::load(path)?,
                    None => QueryPlan::standard(),
                };
                report::execute(ctx, &plan)
            }
            Commands::Cost { route } => single(
                ctx,
                Query::Cost {
                    route: parse_route(route)?,
                },
            ),
            Commands::CountReturning { start, max_depth } => single(
                ctx,
                Query::CountReturning {
                    start: *start,
                    max_depth: *max_depth,
                },
            ),
            Commands::CountAtDepth {
                start,
                target,
                depth,
            } => single(
                ctx,
                Query::CountAtDepth {
                    start: *start,
                    target: *target,
                    depth: *depth,
                },
            ),
            Commands::CountUnderCost {
                start,
                target,
                limit,
            } => single(
                ctx,
                Query::CountUnderCost {
                    start: *start,
                    target: *target,
                    limit: *limit,
                },
            ),
            Commands::Cheapest { from, to } => single(
                ctx,
                Query::Cheapest {
                    from: *from,
                    to: *to,
                },
            ),
        }
    }
}

fn single(ctx: &CommandContext, query: Query) -> Result<()> {
    report::execute(
        ctx,
        &QueryPlan {
            queries: vec![query],
        },
    )
}
