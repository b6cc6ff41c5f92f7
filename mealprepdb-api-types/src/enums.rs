use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string does not belong to a closed vocabulary.
#[derive(Debug, Clone, thiserror::Error)]
#[error("'{value}' is not a valid {vocabulary}")]
pub struct EnumParseError {
    pub vocabulary: &'static str,
    pub value: String,
}

/// Classification of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientType {
    Meat,
    Vegetable,
    /// rice, flour, cornstarch
    Starch,
    Herb,
    /// cumin, bought spice, homemade spice mix
    Spice,
    Seeds,
    Nuts,
    Legumes,
    Fruit,
    /// onion, garlic, ginger
    BaseVegetable,
    /// store bought
    SauceBroth,
    /// soy sauce, cooking wine, salt
    Seasonings,
    Dairy,
}

impl IngredientType {
    /// The database/wire string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientType::Meat => "meat",
            IngredientType::Vegetable => "vegetable",
            IngredientType::Starch => "starch",
            IngredientType::Herb => "herb",
            IngredientType::Spice => "spice",
            IngredientType::Seeds => "seeds",
            IngredientType::Nuts => "nuts",
            IngredientType::Legumes => "legumes",
            IngredientType::Fruit => "fruit",
            IngredientType::BaseVegetable => "base_vegetable",
            IngredientType::SauceBroth => "sauce_broth",
            IngredientType::Seasonings => "seasonings",
            IngredientType::Dairy => "dairy",
        }
    }

    /// All database strings, in declaration order. Used by the schema
    /// migration to build the column check constraint.
    pub fn variants() -> &'static [&'static str] {
        &[
            "meat",
            "vegetable",
            "starch",
            "herb",
            "spice",
            "seeds",
            "nuts",
            "legumes",
            "fruit",
            "base_vegetable",
            "sauce_broth",
            "seasonings",
            "dairy",
        ]
    }
}

impl fmt::Display for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IngredientType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meat" => Ok(IngredientType::Meat),
            "vegetable" => Ok(IngredientType::Vegetable),
            "starch" => Ok(IngredientType::Starch),
            "herb" => Ok(IngredientType::Herb),
            "spice" => Ok(IngredientType::Spice),
            "seeds" => Ok(IngredientType::Seeds),
            "nuts" => Ok(IngredientType::Nuts),
            "legumes" => Ok(IngredientType::Legumes),
            "fruit" => Ok(IngredientType::Fruit),
            "base_vegetable" => Ok(IngredientType::BaseVegetable),
            "sauce_broth" => Ok(IngredientType::SauceBroth),
            "seasonings" => Ok(IngredientType::Seasonings),
            "dairy" => Ok(IngredientType::Dairy),
            other => Err(EnumParseError {
                vocabulary: "ingredient type",
                value: other.to_string(),
            }),
        }
    }
}

/// Classification of a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Lunch,
    Breakfast,
    Dinner,
    Dessert,
    Snack,
}

impl MealType {
    /// The database/wire string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Lunch => "lunch",
            MealType::Breakfast => "breakfast",
            MealType::Dinner => "dinner",
            MealType::Dessert => "dessert",
            MealType::Snack => "snack",
        }
    }

    /// All database strings, in declaration order.
    pub fn variants() -> &'static [&'static str] {
        &["lunch", "breakfast", "dinner", "dessert", "snack"]
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lunch" => Ok(MealType::Lunch),
            "breakfast" => Ok(MealType::Breakfast),
            "dinner" => Ok(MealType::Dinner),
            "dessert" => Ok(MealType::Dessert),
            "snack" => Ok(MealType::Snack),
            other => Err(EnumParseError {
                vocabulary: "meal type",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_type_round_trip() {
        for s in IngredientType::variants() {
            let parsed: IngredientType = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
    }

    #[test]
    fn test_ingredient_type_rejects_unknown() {
        assert!("eggs".parse::<IngredientType>().is_err());
        assert!("".parse::<IngredientType>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&IngredientType::BaseVegetable).unwrap();
        assert_eq!(json, "\"base_vegetable\"");
        let back: IngredientType = serde_json::from_str("\"sauce_broth\"").unwrap();
        assert_eq!(back, IngredientType::SauceBroth);
    }

    #[test]
    fn test_meal_type_round_trip() {
        for s in MealType::variants() {
            let parsed: MealType = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("brunch".parse::<MealType>().is_err());
    }
}
