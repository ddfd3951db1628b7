use homebrew_scraper::{scrape, write_recipes, RecipeField, ScraperConfig, Termination};

fn fast_config() -> ScraperConfig {
    ScraperConfig {
        retry_delay_ms: 0,
        page_delay_ms: 0,
        timeout_secs: 5,
        ..ScraperConfig::default()
    }
}

fn recipe_post(title: &str, author: Option<&str>) -> String {
    let author = author
        .map(|a| format!(r#"<div class="recipe-author">{a}</div>"#))
        .unwrap_or_default();
    format!(
        r#"
        <div class="recipe-post">
            <div class="recipe-title">{title}</div>
            {author}
            <div class="recipe-date">Posted 12 Jan 2023</div>
            <div class="recipe-ingredients">
                4.5 kg Golden Promise<br>
                250 g Munich<br>
                28 g East Kent Goldings
            </div>
            <div class="recipe-instructions">
                <ol>
                    <li>Mash at 67°C for 60 minutes</li>
                    <li>Boil 60 minutes</li>
                    <li>Ferment at 19°C</li>
                </ol>
            </div>
        </div>
        "#
    )
}

fn listing(posts: &[String], next_link: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
        <html>
        <head><title>Homebrew recipes</title></head>
        <body>
            <h1>Recipes</h1>
            {}
            <div class="pagination">{}</div>
        </body>
        </html>"#,
        posts.concat(),
        next_link.unwrap_or("")
    )
}

#[test]
fn test_two_page_scrape_keeps_order_and_drops_incomplete_posts() {
    let mut server = mockito::Server::new();

    let page1 = listing(
        &[
            recipe_post("Best Bitter", Some("alewife")),
            recipe_post("Oatmeal Stout", Some("darkside")),
            recipe_post("No Author Lager", None),
            recipe_post("West Coast IPA", Some("hopfiend")),
        ],
        Some(r#"<a class="next-page" href="/recipes/page/2">Next »</a>"#),
    );
    let page2 = listing(
        &[
            recipe_post("Hefeweizen", Some("bavarian")),
            recipe_post("Dry Irish Stout", Some("darkside")),
        ],
        None,
    );

    let m1 = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page1)
        .create();
    let m2 = server
        .mock("GET", "/recipes/page/2")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page2)
        .create();

    let url = format!("{}/recipes", server.url());
    let report = scrape(&url, &fast_config()).unwrap();

    m1.assert();
    m2.assert();
    assert_eq!(report.termination, Termination::NoNextPage);
    assert_eq!(report.pages_fetched, 2);

    let titles: Vec<_> = report.recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Best Bitter",
            "Oatmeal Stout",
            "West Coast IPA",
            "Hefeweizen",
            "Dry Irish Stout"
        ]
    );

    assert_eq!(report.discarded.len(), 1);
    assert_eq!(report.discarded[0].rejection.field, RecipeField::Author);
    assert_eq!(report.discarded[0].rejection.post_index, 2);

    let first = &report.recipes[0];
    assert_eq!(first.date, "Posted 12 Jan 2023");
    assert_eq!(
        first.ingredients,
        vec!["4.5 kg Golden Promise", "250 g Munich", "28 g East Kent Goldings"]
    );
    assert_eq!(first.instructions.len(), 3);

    // Written output has exactly the five complete records
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homebrew_recipes.json");
    write_recipes(&report.recipes, &path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), 5);
    for object in array {
        for key in ["title", "author", "date", "ingredients", "instructions"] {
            assert!(!object[key].is_null(), "missing {key}");
        }
    }
    assert_eq!(array[4]["title"], "Dry Irish Stout");
}

#[test]
fn test_start_page_failure_retries_then_returns_empty() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/recipes")
        .with_status(500)
        .expect(3)
        .create();

    let url = format!("{}/recipes", server.url());
    let report = scrape(&url, &fast_config()).unwrap();

    mock.assert();
    assert!(report.recipes.is_empty());
    assert_eq!(report.pages_fetched, 0);
    match &report.termination {
        Termination::FetchFailed { url: failed, error } => {
            assert!(failed.as_str().ends_with("/recipes"));
            assert!(error.contains("3 attempts"));
        }
        other => panic!("expected FetchFailed, got {other:?}"),
    }
}

#[test]
fn test_second_page_failure_keeps_first_page() {
    let mut server = mockito::Server::new();
    let _m1 = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_body(listing(
            &[recipe_post("Kölsch", Some("rheinland"))],
            Some(r#"<a rel="next" href="/recipes/page/2">2</a>"#),
        ))
        .create();
    let m2 = server
        .mock("GET", "/recipes/page/2")
        .with_status(502)
        .expect(3)
        .create();

    let url = format!("{}/recipes", server.url());
    let report = scrape(&url, &fast_config()).unwrap();

    m2.assert();
    assert_eq!(report.recipes.len(), 1);
    assert_eq!(report.recipes[0].title, "Kölsch");
    assert!(matches!(report.termination, Termination::FetchFailed { .. }));
}

#[test]
fn test_cycle_between_pages_terminates() {
    let mut server = mockito::Server::new();
    let _m1 = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_body(listing(
            &[recipe_post("Barleywine", Some("oldale"))],
            Some(r#"<a href="/recipes/page/2">More</a>"#),
        ))
        .create();
    let _m2 = server
        .mock("GET", "/recipes/page/2")
        .with_status(200)
        .with_body(listing(
            &[recipe_post("Scotch Ale", Some("oldale"))],
            Some(r#"<a href="/recipes">Next</a>"#),
        ))
        .create();

    let url = format!("{}/recipes", server.url());
    let report = scrape(&url, &fast_config()).unwrap();

    assert_eq!(report.recipes.len(), 2);
    assert!(matches!(report.termination, Termination::AlreadyVisited(_)));
}

#[test]
fn test_custom_selectors_retarget_site() {
    let mut config = fast_config();
    config.selectors.post.tag = "article".to_string();
    config.selectors.post.class = "topic".to_string();
    config.selectors.title.tag = "h2".to_string();

    let body = r#"
        <html><body>
            <article class="topic">
                <h2 class="recipe-title">Rauchbier</h2>
                <div class="recipe-author">bamberg</div>
                <div class="recipe-date">2019</div>
                <div class="recipe-ingredients">Smoked malt</div>
                <div class="recipe-instructions">Decoct</div>
            </article>
        </body></html>
    "#;

    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/forum")
        .with_status(200)
        .with_body(body)
        .create();

    let report = scrape(&format!("{}/forum", server.url()), &config).unwrap();

    assert_eq!(report.recipes.len(), 1);
    assert_eq!(report.recipes[0].title, "Rauchbier");
}

#[test]
fn test_invalid_start_url_is_an_error() {
    assert!(scrape("not a url", &fast_config()).is_err());
}
