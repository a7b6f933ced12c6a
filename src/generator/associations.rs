use crate::generator::Associations;

/// Fold `addition` into `target`, summing scores of words present in both.
///
/// `{apple: 20, core: 10}` + `{core: 30, hollow: 5}` = `{apple: 20, core: 40, hollow: 5}`
pub fn combine_associations<'a>(
    target: &'a mut Associations,
    addition: &Associations,
) -> &'a mut Associations {
    for (word, score) in addition {
        *target.entry(word.clone()).or_insert(0.0) += *score;
    }
    target
}
