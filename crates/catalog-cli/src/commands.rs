//! Subcommand implementations
//!
//! Every command writes to caller-supplied sinks so it can be driven from
//! tests as well as from `main`.

use crate::kind::EntityKind;
use crate::prompt::Prompted;
use anyhow::Context;
use catalog_core::Entity;
use catalog_plant::{sort_by_name, Specimen};
use catalog_post::{total_post_count, Post};
use rand::Rng;
use std::io::{BufRead, Write};

/// Options for [`random`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomOptions {
    pub kind: EntityKind,
    pub count: usize,
    pub sorted: bool,
    pub json: bool,
}

/// Generate `options.count` random entities and print them
///
/// # Errors
/// Returns error if writing output fails
pub fn random<R: Rng + ?Sized, W: Write>(
    options: RandomOptions,
    rng: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::info!(kind = %options.kind, count = options.count, "generating entities");

    match options.kind {
        EntityKind::Specimen(kind) => {
            let mut specimens: Vec<Specimen> = (0..options.count)
                .map(|_| Specimen::random_of(kind, rng))
                .collect();
            if options.sorted {
                sort_by_name(&mut specimens);
            }
            emit(&specimens, options.json, out)
        }
        EntityKind::Post => {
            if options.sorted {
                tracing::warn!("--sorted only applies to plants; ignoring");
            }
            let posts: Vec<Post> = (0..options.count).map(|_| Post::random(rng)).collect();
            tracing::debug!(total = total_post_count(), "posts constructed");
            emit(&posts, options.json, out)
        }
    }
}

/// Read one entity of `kind` from `input`, announcing fields on `prompts_out`
///
/// # Errors
/// Returns error if reading input or writing output fails
pub fn enter<R: BufRead, P: Write, W: Write>(
    kind: EntityKind,
    input: R,
    prompts_out: P,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut source = Prompted::new(input, prompts_out, kind.field_labels());
    match kind {
        EntityKind::Specimen(kind) => {
            let mut specimen = Specimen::empty(kind);
            specimen.init(&mut source).context("reading specimen fields")?;
            writeln!(out, "{specimen}")?;
        }
        EntityKind::Post => {
            let mut post = Post::default();
            post.init(&mut source).context("reading post counters")?;
            writeln!(out, "{post}")?;
        }
    }
    Ok(())
}

/// Print derived metrics of a post
///
/// # Errors
/// Returns error if `audience` is zero or writing output fails
pub fn stats<W: Write>(post: &Post, audience: u64, out: &mut W) -> anyhow::Result<()> {
    let rate = post
        .engagement_rate(audience)
        .context("computing engagement rate")?;

    writeln!(out, "Counters: {post}")?;
    writeln!(out, "Coverage: {:.1}k views", f64::from(post))?;
    writeln!(out, "Active: {}", bool::from(post))?;
    writeln!(out, "Engagement rate: {rate:.2}%")?;
    writeln!(out, "Posts constructed: {}", total_post_count())?;
    Ok(())
}

fn emit<T, W>(items: &[T], json: bool, out: &mut W) -> anyhow::Result<()>
where
    T: serde::Serialize + std::fmt::Display,
    W: Write,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, items).context("serializing entities")?;
        writeln!(out)?;
    } else {
        for item in items {
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}
