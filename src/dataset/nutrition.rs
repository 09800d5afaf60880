//! Static nutrition table.
//!
//! Values are per 100 g of the raw or plainly cooked food. The table is a
//! compiled-in asset, so lookups never fail for reasons other than an
//! unknown name.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Message returned when a food has no nutrition entry.
pub const NOT_FOUND_MESSAGE: &str = "❌ Food not found. Please try another.";

/// Macronutrient breakdown for one food.
///
/// Whole amounts serialize as integers (`52`, not `52.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(serialize_with = "serialize_amount")]
    pub calories: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub protein: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub carbs: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub fat: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub fiber: f64,
}

fn serialize_amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // i64 covers every whole amount below 2^63
    if value.fract() == 0.0 && value.abs() < 9.2e18 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

const fn facts(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein,
        carbs,
        fat,
        fiber,
    }
}

static FOODS: &[(&str, NutritionFacts)] = &[
    ("apple", facts(52.0, 0.3, 14.0, 0.2, 2.4)),
    ("banana", facts(89.0, 1.1, 23.0, 0.3, 2.6)),
    ("orange", facts(47.0, 0.9, 12.0, 0.1, 2.4)),
    ("grapes", facts(69.0, 0.7, 18.0, 0.2, 0.9)),
    ("carrot", facts(41.0, 0.9, 10.0, 0.2, 2.8)),
    ("spinach", facts(23.0, 2.9, 3.6, 0.4, 2.2)),
    ("broccoli", facts(55.0, 3.7, 11.0, 0.6, 3.8)),
    ("rice", facts(130.0, 2.7, 28.0, 0.3, 0.4)),
    ("bread", facts(265.0, 9.0, 49.0, 3.2, 2.7)),
    ("chicken breast", facts(165.0, 31.0, 0.0, 3.6, 0.0)),
    ("milk", facts(42.0, 3.4, 5.0, 1.0, 0.0)),
    ("egg", facts(155.0, 13.0, 1.1, 11.0, 0.0)),
    ("cheese", facts(402.0, 25.0, 1.3, 33.0, 0.0)),
    ("yogurt", facts(59.0, 10.0, 3.6, 0.4, 0.0)),
    ("beef", facts(250.0, 26.0, 0.0, 17.0, 0.0)),
    ("salmon", facts(208.0, 20.0, 0.0, 13.0, 0.0)),
    ("potato", facts(77.0, 2.0, 17.0, 0.1, 2.2)),
    ("sweet potato", facts(86.0, 1.6, 20.0, 0.1, 3.0)),
    ("oats", facts(389.0, 17.0, 66.0, 7.0, 10.6)),
    ("almonds", facts(579.0, 21.0, 22.0, 50.0, 12.5)),
    ("walnuts", facts(654.0, 15.0, 14.0, 65.0, 6.7)),
    ("peanuts", facts(567.0, 26.0, 16.0, 49.0, 8.5)),
    ("butter", facts(717.0, 0.9, 0.1, 81.0, 0.0)),
    ("honey", facts(304.0, 0.3, 82.0, 0.0, 0.2)),
    ("strawberry", facts(32.0, 0.7, 7.7, 0.3, 2.0)),
    ("blueberry", facts(57.0, 0.7, 14.0, 0.3, 2.4)),
    ("raspberry", facts(52.0, 1.2, 12.0, 0.7, 6.5)),
    ("blackberry", facts(43.0, 1.4, 10.0, 0.5, 5.3)),
    ("kiwi", facts(61.0, 1.1, 15.0, 0.5, 3.0)),
    ("pineapple", facts(50.0, 0.5, 13.0, 0.1, 1.4)),
    ("mango", facts(60.0, 0.8, 15.0, 0.4, 1.6)),
    ("pear", facts(57.0, 0.4, 15.0, 0.1, 3.1)),
    ("peach", facts(39.0, 0.9, 10.0, 0.3, 1.5)),
    ("plum", facts(46.0, 0.7, 11.0, 0.3, 1.4)),
    ("cherry", facts(50.0, 1.0, 12.0, 0.3, 1.6)),
    ("watermelon", facts(30.0, 0.6, 8.0, 0.2, 0.4)),
    ("cantaloupe", facts(34.0, 0.8, 8.0, 0.2, 0.9)),
    ("honeydew", facts(36.0, 0.5, 9.0, 0.1, 0.8)),
    ("apricot", facts(48.0, 1.4, 11.0, 0.4, 2.0)),
    ("nectarine", facts(44.0, 1.1, 11.0, 0.3, 1.7)),
    ("pomegranate", facts(83.0, 1.7, 19.0, 1.2, 4.0)),
    ("fig", facts(74.0, 0.8, 19.0, 0.3, 2.9)),
    ("grapefruit", facts(42.0, 0.8, 11.0, 0.1, 1.6)),
    ("lemon", facts(29.0, 1.1, 9.0, 0.3, 2.8)),
    ("lime", facts(30.0, 0.7, 11.0, 0.2, 2.8)),
    ("coconut", facts(354.0, 3.3, 15.0, 33.0, 9.0)),
    ("avocado", facts(160.0, 2.0, 9.0, 15.0, 7.0)),
    ("papaya", facts(43.0, 0.5, 11.0, 0.3, 1.7)),
    ("guava", facts(68.0, 2.6, 14.0, 1.0, 5.4)),
    ("lychee", facts(66.0, 0.8, 17.0, 0.4, 1.3)),
    ("passion fruit", facts(97.0, 2.2, 23.0, 0.7, 10.0)),
    ("dragon fruit", facts(60.0, 1.2, 13.0, 0.0, 3.0)),
    ("star fruit", facts(31.0, 1.0, 7.0, 0.3, 2.8)),
    ("persimmon", facts(127.0, 0.8, 34.0, 0.4, 3.6)),
    ("tangerine", facts(53.0, 0.8, 13.0, 0.3, 1.8)),
    ("clementine", facts(47.0, 0.9, 12.0, 0.2, 1.7)),
    ("boysenberry", facts(50.0, 1.2, 12.0, 0.3, 5.3)),
    ("elderberry", facts(73.0, 0.7, 18.0, 0.5, 7.0)),
    ("gooseberry", facts(44.0, 0.9, 10.0, 0.6, 4.3)),
    ("mulberry", facts(43.0, 1.4, 10.0, 0.4, 1.7)),
    ("plantain", facts(122.0, 1.3, 32.0, 0.4, 2.3)),
    ("ackee", facts(151.0, 2.9, 0.8, 15.0, 2.7)),
    ("breadfruit", facts(103.0, 1.1, 27.0, 0.2, 4.9)),
    ("cherimoya", facts(75.0, 1.6, 18.0, 0.7, 3.0)),
    ("durian", facts(147.0, 1.5, 27.0, 5.3, 3.8)),
    ("jackfruit", facts(95.0, 1.7, 23.0, 0.6, 1.5)),
    ("kumquat", facts(71.0, 1.9, 16.0, 0.9, 6.5)),
    ("longan", facts(60.0, 1.3, 15.0, 0.1, 1.1)),
    ("loquat", facts(47.0, 0.4, 12.0, 0.2, 1.7)),
    ("mangosteen", facts(73.0, 0.4, 18.0, 0.6, 1.8)),
    ("quince", facts(57.0, 0.4, 15.0, 0.1, 1.9)),
    ("rambutan", facts(68.0, 0.9, 16.0, 0.2, 0.9)),
    ("sapodilla", facts(83.0, 0.4, 20.0, 1.1, 5.3)),
    ("soursop", facts(66.0, 1.0, 17.0, 0.3, 3.3)),
    ("tamarind", facts(239.0, 2.8, 63.0, 0.6, 5.1)),
    ("ugli fruit", facts(45.0, 0.9, 11.0, 0.2, 1.9)),
    ("yuzu", facts(20.0, 0.5, 7.0, 0.1, 1.8)),
    ("tomato", facts(18.0, 0.9, 3.9, 0.2, 1.2)),
    ("cucumber", facts(16.0, 0.7, 3.6, 0.1, 0.5)),
    ("onion", facts(40.0, 1.1, 9.0, 0.1, 1.7)),
    ("garlic", facts(149.0, 6.4, 33.0, 0.5, 2.1)),
    ("bell pepper", facts(31.0, 1.0, 6.0, 0.3, 2.1)),
    ("zucchini", facts(17.0, 1.2, 3.1, 0.3, 1.0)),
    ("eggplant", facts(25.0, 1.0, 6.0, 0.2, 3.0)),
    ("mushroom", facts(22.0, 3.1, 3.3, 0.3, 1.0)),
    ("cauliflower", facts(25.0, 2.0, 5.0, 0.3, 2.0)),
    ("brussels sprouts", facts(43.0, 3.4, 9.0, 0.3, 3.8)),
    ("kale", facts(35.0, 2.9, 4.4, 1.5, 4.1)),
    ("lettuce", facts(15.0, 1.4, 2.9, 0.2, 1.3)),
    ("cabbage", facts(25.0, 1.3, 5.8, 0.1, 2.5)),
    ("celery", facts(16.0, 0.7, 3.0, 0.2, 1.6)),
    ("asparagus", facts(20.0, 2.2, 3.9, 0.1, 2.1)),
    ("green beans", facts(31.0, 1.8, 7.0, 0.1, 2.7)),
    ("peas", facts(81.0, 5.4, 14.0, 0.4, 5.1)),
    ("corn", facts(86.0, 3.3, 19.0, 1.4, 2.0)),
    ("pumpkin", facts(26.0, 1.0, 6.5, 0.1, 0.5)),
    ("butternut squash", facts(45.0, 1.0, 12.0, 0.1, 2.0)),
    ("beetroot", facts(43.0, 1.6, 10.0, 0.2, 2.8)),
    ("radish", facts(16.0, 0.7, 3.4, 0.1, 1.6)),
    ("turnip", facts(28.0, 0.9, 6.4, 0.1, 1.8)),
    ("artichoke", facts(47.0, 3.3, 11.0, 0.2, 5.4)),
    ("leek", facts(61.0, 1.5, 14.0, 0.3, 1.8)),
    ("fennel", facts(31.0, 1.2, 7.3, 0.2, 3.1)),
    ("bok choy", facts(13.0, 1.5, 2.2, 0.2, 1.0)),
    ("arugula", facts(25.0, 2.6, 3.7, 0.7, 1.6)),
    ("endive", facts(17.0, 1.3, 3.4, 0.2, 3.1)),
    ("watercress", facts(11.0, 2.3, 1.3, 0.1, 0.5)),
    ("collard greens", facts(32.0, 3.0, 5.4, 0.6, 4.0)),
    ("swiss chard", facts(19.0, 1.8, 3.7, 0.2, 1.6)),
    ("okra", facts(33.0, 1.9, 7.5, 0.2, 3.2)),
    ("parsnip", facts(75.0, 1.2, 18.0, 0.3, 4.9)),
    ("rutabaga", facts(37.0, 1.1, 8.6, 0.2, 2.3)),
    ("daikon", facts(18.0, 0.6, 4.1, 0.1, 1.6)),
    ("jicama", facts(38.0, 0.7, 9.0, 0.1, 4.9)),
    ("kohlrabi", facts(27.0, 1.7, 6.2, 0.1, 3.6)),
    ("quinoa", facts(120.0, 4.4, 21.0, 1.9, 2.8)),
    ("barley", facts(354.0, 12.0, 73.0, 2.3, 17.0)),
    ("buckwheat", facts(343.0, 13.0, 72.0, 3.4, 10.0)),
    ("millet", facts(378.0, 11.0, 73.0, 4.2, 8.5)),
    ("bulgur", facts(83.0, 3.1, 19.0, 0.2, 4.5)),
    ("farro", facts(340.0, 15.0, 71.0, 2.5, 10.0)),
    ("spelt", facts(338.0, 15.0, 70.0, 2.4, 10.7)),
    ("amaranth", facts(371.0, 14.0, 65.0, 7.0, 7.0)),
    ("teff", facts(367.0, 13.0, 73.0, 2.4, 8.0)),
    ("cornmeal", facts(370.0, 7.0, 79.0, 1.8, 7.3)),
    ("whole wheat flour", facts(340.0, 13.0, 72.0, 2.5, 10.7)),
    ("white flour", facts(364.0, 10.0, 76.0, 1.0, 2.7)),
    ("rye flour", facts(325.0, 10.0, 69.0, 1.6, 15.1)),
    ("coconut flour", facts(400.0, 20.0, 60.0, 13.0, 39.0)),
    ("almond flour", facts(600.0, 24.0, 20.0, 53.0, 11.0)),
    ("corn flour", facts(364.0, 6.9, 76.0, 3.9, 7.3)),
    ("sorghum", facts(329.0, 11.0, 72.0, 3.5, 6.7)),
    ("wild rice", facts(101.0, 4.0, 21.0, 0.3, 1.8)),
    ("basmati rice", facts(130.0, 2.7, 28.0, 0.3, 0.4)),
    ("jasmine rice", facts(130.0, 2.7, 28.0, 0.3, 0.4)),
    ("brown rice", facts(111.0, 2.6, 23.0, 0.9, 1.8)),
    ("black rice", facts(160.0, 5.0, 34.0, 1.5, 2.0)),
    ("red rice", facts(140.0, 3.0, 30.0, 1.0, 2.5)),
    ("sushi rice", facts(130.0, 2.7, 28.0, 0.3, 0.4)),
    ("arborio rice", facts(130.0, 2.7, 28.0, 0.3, 0.4)),
    ("couscous", facts(112.0, 3.8, 23.0, 0.2, 1.4)),
    ("polenta", facts(70.0, 1.4, 15.0, 0.4, 1.2)),
    ("tuna", facts(144.0, 23.0, 0.0, 5.0, 0.0)),
    ("pork", facts(242.0, 25.0, 0.0, 16.0, 0.0)),
    ("turkey", facts(135.0, 29.0, 0.0, 3.0, 0.0)),
    ("lamb", facts(294.0, 25.0, 0.0, 21.0, 0.0)),
    ("duck", facts(337.0, 19.0, 0.0, 28.0, 0.0)),
    ("cod", facts(82.0, 18.0, 0.0, 0.7, 0.0)),
    ("tilapia", facts(96.0, 20.0, 0.0, 1.7, 0.0)),
    ("shrimp", facts(99.0, 24.0, 0.2, 0.3, 0.0)),
    ("crab", facts(97.0, 20.0, 0.0, 1.5, 0.0)),
    ("lobster", facts(90.0, 19.0, 0.5, 0.9, 0.0)),
    ("mussels", facts(86.0, 12.0, 3.7, 2.2, 0.0)),
    ("oysters", facts(68.0, 7.0, 3.9, 2.5, 0.0)),
    ("scallops", facts(111.0, 21.0, 2.4, 1.6, 0.0)),
    ("sardines", facts(208.0, 25.0, 0.0, 11.0, 0.0)),
    ("anchovies", facts(131.0, 20.0, 0.0, 4.8, 0.0)),
    ("mackerel", facts(205.0, 19.0, 0.0, 14.0, 0.0)),
    ("trout", facts(141.0, 20.0, 0.0, 6.2, 0.0)),
    ("halibut", facts(111.0, 23.0, 0.0, 2.3, 0.0)),
    ("bass", facts(124.0, 21.0, 0.0, 4.0, 0.0)),
    ("herring", facts(158.0, 18.0, 0.0, 9.0, 0.0)),
    ("catfish", facts(95.0, 16.0, 0.0, 2.8, 0.0)),
    ("swordfish", facts(144.0, 19.0, 0.0, 7.5, 0.0)),
    ("clams", facts(74.0, 13.0, 2.6, 0.8, 0.0)),
    ("octopus", facts(82.0, 15.0, 2.2, 1.0, 0.0)),
    ("squid", facts(92.0, 16.0, 3.1, 1.4, 0.0)),
    ("frog legs", facts(73.0, 16.0, 0.0, 0.3, 0.0)),
    ("rabbit", facts(173.0, 33.0, 0.0, 3.5, 0.0)),
    ("venison", facts(158.0, 30.0, 0.0, 3.2, 0.0)),
    ("bison", facts(143.0, 28.0, 0.0, 2.4, 0.0)),
    ("elk", facts(146.0, 30.0, 0.0, 2.0, 0.0)),
    ("quail", facts(227.0, 25.0, 0.0, 14.0, 0.0)),
    ("pheasant", facts(181.0, 30.0, 0.0, 6.0, 0.0)),
    ("goose", facts(371.0, 25.0, 0.0, 30.0, 0.0)),
    ("emu", facts(134.0, 23.0, 0.0, 4.0, 0.0)),
    ("ostrich", facts(145.0, 27.0, 0.0, 3.0, 0.0)),
    ("alligator", facts(143.0, 29.0, 0.0, 2.6, 0.0)),
    ("kangaroo", facts(121.0, 23.0, 0.0, 2.5, 0.0)),
    ("cream", facts(340.0, 2.1, 2.8, 36.0, 0.0)),
    ("sour cream", facts(193.0, 2.4, 4.3, 19.0, 0.0)),
    ("cottage cheese", facts(98.0, 11.0, 3.4, 4.3, 0.0)),
    ("ricotta", facts(174.0, 11.0, 3.0, 13.0, 0.0)),
    ("feta", facts(264.0, 14.0, 4.1, 21.0, 0.0)),
    ("mozzarella", facts(280.0, 28.0, 3.1, 17.0, 0.0)),
    ("parmesan", facts(392.0, 36.0, 3.2, 26.0, 0.0)),
    ("cheddar", facts(403.0, 25.0, 1.3, 33.0, 0.0)),
    ("swiss", facts(380.0, 27.0, 5.0, 28.0, 0.0)),
    ("gouda", facts(356.0, 25.0, 2.2, 27.0, 0.0)),
    ("brie", facts(334.0, 21.0, 0.5, 28.0, 0.0)),
    ("camembert", facts(300.0, 20.0, 0.5, 24.0, 0.0)),
    ("blue cheese", facts(353.0, 21.0, 2.3, 29.0, 0.0)),
];

fn table() -> &'static HashMap<&'static str, NutritionFacts> {
    static TABLE: OnceLock<HashMap<&'static str, NutritionFacts>> = OnceLock::new();
    TABLE.get_or_init(|| FOODS.iter().copied().collect())
}

/// Look up a food by exact name. The query is trimmed and lowercased first.
pub fn lookup(query: &str) -> Option<&'static NutritionFacts> {
    table().get(query.trim().to_lowercase().as_str())
}

/// Number of foods in the table
pub fn len() -> usize {
    table().len()
}
