use tracing::debug;

/// One large-number grouping scheme: the group width plus how a nonzero
/// group is read at a given tier (including its unit suffix).
pub(crate) trait GroupScheme {
    const NAME: &'static str;
    const BASE: u64;
    type Output: Default;

    fn push_group(output: &mut Self::Output, group: u64, tier: usize);
}

/// Splits `n` into base-`base` groups, least significant first.
pub(crate) fn split_groups(mut n: u64, base: u64) -> Vec<u64> {
    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % base);
        n /= base;
    }
    groups
}

/// Reads every nonzero group from the highest tier down. Zero groups
/// contribute nothing, not even a unit.
pub(crate) fn compose<S: GroupScheme>(n: u64) -> S::Output {
    let groups = split_groups(n, S::BASE);
    debug!("{} groups for {}: {:?}", S::NAME, n, groups);
    let mut output = S::Output::default();
    for (tier, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        S::push_group(&mut output, group, tier);
    }
    output
}
