//! Pool building: which assets fit the context, and which of those to rotate next.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::domain::{Asset, ManifestDocument};
use crate::engine::context::Context;

/// Assets that fit `context`, or the whole manifest when none do.
///
/// An asset fits when it is tagged for today's event, or when it is tagged for
/// the time period and (with a market mood in play) for that mood too.
pub fn match_assets<'a>(manifest: &'a ManifestDocument, context: &Context) -> Vec<&'a Asset> {
    let event_key = context.event_key();
    let mood = context.active_mood();

    let matching: Vec<&Asset> = manifest
        .gifs
        .iter()
        .filter(|asset| {
            if let Some(key) = event_key.as_deref() {
                if asset.tagged_for_event(key) {
                    return true;
                }
            }
            asset.suits_period(context.time) && mood.is_none_or(|m| asset.suits_mood(m))
        })
        .collect();

    if matching.is_empty() {
        manifest.gifs.iter().collect()
    } else {
        matching
    }
}

/// Shuffle the candidates and take up to `pool_size` of them, preferring ones not shown yet.
///
/// Unseen candidates are only used on their own when there are enough of them to fill
/// the pool; otherwise the pool comes from the full shuffled list.
pub fn select_pool<R>(
    mut candidates: Vec<&Asset>,
    pool_size: usize,
    shown: &HashSet<String>,
    rng: &mut R,
) -> Vec<Asset>
where
    R: Rng + ?Sized,
{
    candidates.shuffle(rng);

    let unseen: Vec<&Asset> = candidates
        .iter()
        .copied()
        .filter(|asset| !shown.contains(&asset.file))
        .collect();

    let source = if unseen.len() >= pool_size {
        &unseen
    } else {
        &candidates
    };

    source
        .iter()
        .take(pool_size)
        .map(|asset| (*asset).clone())
        .collect()
}
