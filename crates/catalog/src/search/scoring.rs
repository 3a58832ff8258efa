use crate::product::Product;

/// Weight of a token found in the product name.
pub const NAME_WEIGHT: u32 = 10;
/// Weight of a token found in the category title.
pub const CATEGORY_WEIGHT: u32 = 5;
/// Weight of a token found anywhere in the searchable text.
///
/// The searchable text includes name and category, so hits there also earn
/// this weight.
pub const TEXT_WEIGHT: u32 = 2;

/// Lower-cased blob of every searchable field, space-joined in a fixed order:
/// name, category title, material, colors, occasions, tags.
pub fn searchable_text(product: &Product) -> String {
    let head = [
        product.name.as_str(),
        product.category_title().unwrap_or_default(),
        product.material.as_str(),
    ];
    let tail = product
        .colors
        .iter()
        .chain(&product.occasions)
        .chain(&product.tags)
        .map(String::as_str);

    head.into_iter()
        .chain(tail)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Relevance of `product` for already-normalized `tokens`; 0 means no match.
pub fn score<S: AsRef<str>>(product: &Product, tokens: &[S]) -> u32 {
    let name = product.name.to_lowercase();
    let category = product.category_title().map(str::to_lowercase);
    let text = searchable_text(product);

    tokens
        .iter()
        .map(|token| AsRef::<str>::as_ref(token))
        .map(|token| {
            let mut points = 0;
            if name.contains(token) {
                points += NAME_WEIGHT;
            }
            if category.as_deref().is_some_and(|c| c.contains(token)) {
                points += CATEGORY_WEIGHT;
            }
            if text.contains(token) {
                points += TEXT_WEIGHT;
            }
            points
        })
        .sum()
}
