use super::{Category, PortfolioItem};

/// Items in `category`; `Category::All` keeps everything.
pub fn filter_portfolio(items: &[PortfolioItem], category: Category) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| category == Category::All || item.category == category)
        .copied()
        .collect()
}

/// `All` followed by each category present, in first-seen order.
pub fn categories(items: &[PortfolioItem]) -> Vec<Category> {
    let mut found = vec![Category::All];
    for item in items {
        if !found.contains(&item.category) {
            found.push(item.category);
        }
    }
    found
}
