use recipe_scraper::extractors::extract_ingredients;
use recipe_scraper::ParsingContext;

fn ingredients(body: &str) -> Vec<String> {
    let html = format!("<html><body>{body}</body></html>");
    extract_ingredients(&ParsingContext::new("https://example.com/recipe", &html))
}

#[test]
fn test_labelled_items_are_sorted() {
    let result = ingredients(
        r#"<ul>
             <li class="wprm-recipe-ingredient">2 eggs</li>
             <li class="wprm-recipe-ingredient">1 cup flour</li>
             <li class="wprm-recipe-ingredient">▢ 1/2 cup sugar</li>
           </ul>"#,
    );
    assert_eq!(result, vec!["1 cup flour", "1/2 cup sugar", "2 eggs"]);
}

#[test]
fn test_labelled_items_by_id() {
    let result = ingredients(r#"<ul><li id="ingredient-2">salt</li><li id="ingredient-1">oil</li></ul>"#);
    assert_eq!(result, vec!["oil", "salt"]);
}

#[test]
fn test_labelled_container_keeps_document_order() {
    let result = ingredients(
        r#"<div class="recipe-ingredients">
             <ul><li>3 carrots</li><li>1 onion</li><li>3 carrots</li></ul>
           </div>"#,
    );
    assert_eq!(result, vec!["3 carrots", "1 onion"]);
}

#[test]
fn test_labelled_items_win_over_containers() {
    let result = ingredients(
        r#"<ul class="ingredients">
             <li>b item</li>
             <li class="ingredient">a item</li>
           </ul>"#,
    );
    assert_eq!(result, vec!["a item"]);
}

#[test]
fn test_heading_list() {
    let result = ingredients(
        r#"<div><h2>Ingredients</h2></div>
           <p>You will need:</p>
           <ul><li>200 g pasta</li><li>1 tbsp olive oil</li></ul>
           <ul><li>not this</li></ul>"#,
    );
    assert_eq!(result, vec!["200 g pasta", "1 tbsp olive oil"]);
}

#[test]
fn test_no_ingredients_is_empty() {
    assert!(ingredients("<ul><li>Home</li><li>About</li></ul>").is_empty());
}
