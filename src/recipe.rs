// Recipe data model and the single hardcoded record the screen renders.

/// One ingredient tile: logical image name plus two text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reviews {
    pub photos: &'static str,
    pub comment: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: &'static str,
    pub category: &'static str,
    pub cooking_time: &'static str,
    pub energy: &'static str,
    pub rating: &'static str,
    pub description: &'static str,
    /// Logical name of the header photo.
    pub header_image: &'static str,
    pub reviews: Reviews,
    pub ingredients: Vec<Ingredient>,
}

const fn ingredient(image: &'static str, title: &'static str, subtitle: &'static str) -> Ingredient {
    Ingredient { image, title, subtitle }
}

pub fn strawberry_cake() -> Recipe {
    Recipe {
        title: "Strawberry Cake",
        category: "Desserts",
        cooking_time: "50 min",
        energy: "620 kcal",
        rating: "4.5",
        description: "This dessert is very tasty and not difficult to prepare. Also, you can replace strawberries with any other berry you like.",
        header_image: "strawberry_pie_1",
        reviews: Reviews {
            photos: "84 Photos",
            comment: "450 Comments",
        },
        ingredients: vec![
            ingredient("flour", "Flour", "450 g"),
            ingredient("eggs", "Eggs", "4"),
            ingredient("juice", "Lemon juice", "150 g"),
            ingredient("strawberry", "Strawberry", "200 g"),
            ingredient("suggar", "Sugar", "1 cup"),
            ingredient("mind", "Mind", "20 g"),
            ingredient("vanilla", "Vanilla", "1/2 teaspoon"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strawberry_cake_keeps_ingredient_order() {
        let r = strawberry_cake();
        let titles: Vec<&str> = r.ingredients.iter().map(|i| i.title).collect();
        assert_eq!(
            titles,
            ["Flour", "Eggs", "Lemon juice", "Strawberry", "Sugar", "Mind", "Vanilla"]
        );
        assert_eq!(r.reviews.photos, "84 Photos");
        assert_eq!(r.category, "Desserts");
    }
}
