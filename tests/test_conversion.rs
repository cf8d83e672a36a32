use recipe_scraper::units::{convert_units, parse_ingredient_lines, scale_servings};
use recipe_scraper::{Quantity, UnitSystem};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_imperial_recipe_to_metric() {
    let (ingredients, system) = parse_ingredient_lines(&lines(&[
        "2 cups oil",
        "1 cup sugar",
        "1-2 cups milk",
        "3 eggs",
    ]));
    assert_eq!(system, Some(UnitSystem::Imperial));

    let converted =
        convert_units(&ingredients, UnitSystem::Metric, None, 4, system, &ingredients).unwrap();

    assert_eq!(converted[0].to_string(), "473.18 ml oil");
    assert_eq!(converted[1].to_string(), "125.39 g sugar");
    assert_eq!(
        converted[2].quantity,
        Some(Quantity::Range("236.59".into(), "473.18".into()))
    );
    assert_eq!(converted[3], ingredients[3]);
}

#[test]
fn test_metric_recipe_to_imperial() {
    let (ingredients, system) = parse_ingredient_lines(&lines(&[
        "250 grams flour",
        "100 g butter",
        "500 ml water",
    ]));
    assert_eq!(system, Some(UnitSystem::Metric));

    let converted =
        convert_units(&ingredients, UnitSystem::Imperial, None, 2, system, &ingredients).unwrap();

    assert_eq!(converted[0].to_string(), "1.99 cups flour");
    assert_eq!(converted[1].to_string(), "3.53 oz butter");
    assert_eq!(converted[2].to_string(), "2.11 cups water");
}

#[test]
fn test_small_volumes_move_to_spoons() {
    let (ingredients, system) = parse_ingredient_lines(&lines(&["10 ml vanilla", "20 ml lemon juice"]));

    let converted =
        convert_units(&ingredients, UnitSystem::Imperial, None, 2, system, &ingredients).unwrap();

    assert_eq!(converted[0].to_string(), "2.03 tsp vanilla");
    assert_eq!(converted[1].to_string(), "1.35 tbsp lemon juice");
}

#[test]
fn test_scaling_examples() {
    let (ingredients, _) = parse_ingredient_lines(&lines(&["2 eggs", "1/2 cup sugar"]));

    let doubled = scale_servings(&ingredients, 4, 8.0);
    assert_eq!(doubled[0].quantity, Some(Quantity::Single("4".into())));
    assert_eq!(doubled[1].quantity, Some(Quantity::Single("1".into())));

    let halved = scale_servings(&ingredients, 4, 2.0);
    assert_eq!(halved[1].quantity, Some(Quantity::Single("1/4".into())));
}

#[test]
fn test_converted_quantities_can_be_scaled() {
    let (ingredients, system) = parse_ingredient_lines(&lines(&["2 cups oil"]));
    let converted =
        convert_units(&ingredients, UnitSystem::Metric, None, 4, system, &ingredients).unwrap();

    let scaled = scale_servings(&converted, 4, 2.0);
    assert_eq!(scaled[0].quantity, Some(Quantity::Single("236.59".into())));
}
