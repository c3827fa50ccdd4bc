use guided_tour::{Console, ExampleRunner, Page, TourConfig};
use pretty_assertions::assert_eq;

fn config_for(pages: &[Page]) -> TourConfig {
    TourConfig {
        pages: pages.to_vec(),
        ..TourConfig::default()
    }
}

#[test]
fn enumerations_page_transcript() {
    let console = Console::captured();
    ExampleRunner::standard(config_for(&[Page::EnumerationsAndStructures]))
        .run(&console)
        .unwrap();

    assert_eq!(
        console.lines(),
        vec![
            "## Enumerations and Structures",
            "ace raw value: 1",
            "ace equals Rank::Ace: true",
            "raw value 13 is the king",
            "raw value 12 is the queen",
            "raw value 0 is None",
            "hearts are red",
            "diamonds are red",
            "Sunrise is at 6:00 am and sunset is at 8:09 pm.",
            "Failure...  Out of cheese.",
            "The 3 of spades",
            "A full deck has 52 cards, from The ace of spades to The king of clubs",
            "snow raw value: snow",
        ]
    );
}

#[test]
fn protocols_page_transcript() {
    let console = Console::captured();
    ExampleRunner::standard(config_for(&[Page::ProtocolsAndExtensions]))
        .run(&console)
        .unwrap();

    assert_eq!(
        console.lines(),
        vec![
            "## Protocols and Extensions",
            " A very simple class.  Now 100% adjusted. (id 23)",
            "A simple structure (adjusted) (id 32)",
            "The number 7",
            "The number 49 (id 1)",
            "7.5",
            " A very simple class.  Now 100% adjusted.",
        ]
    );
}

#[test]
fn objects_page_highlights() {
    let console = Console::captured();
    ExampleRunner::standard(config_for(&[Page::ObjectsAndClasses]))
        .run(&console)
        .unwrap();

    let lines = console.lines();
    for expected in [
        "A shape with 700 sides.",
        "Round: A shape with 0 sides.",
        "9.3",
        "6.0",
        "50.0",
        "optional square side length: None",
        "Hello I'm Jonas! My id is 21312323",
        "salary 350.0, tax 210.0",
    ] {
        assert!(
            lines.iter().any(|line| line == expected),
            "missing line {expected:?} in {lines:#?}"
        );
    }
}

#[tokio::test]
async fn full_tour_runs_in_order_and_greets_once() {
    let console = Console::captured();
    let report = ExampleRunner::standard(TourConfig::default())
        .run(&console)
        .unwrap();

    assert_eq!(report.pages, Page::ALL.to_vec());
    assert_eq!(report.pending(), 1);
    report.finish().await.unwrap();

    let lines = console.lines();
    let headings: Vec<&str> = lines
        .iter()
        .filter(|line| line.starts_with("## "))
        .map(String::as_str)
        .collect();
    assert_eq!(
        headings,
        vec![
            "## Enumerations and Structures",
            "## Objects and Classes",
            "## Protocols and Extensions",
            "## Concurrency",
        ]
    );

    let greetings = lines
        .iter()
        .filter(|line| *line == "Hello John Appleseed, user ID 97")
        .count();
    assert_eq!(greetings, 1);
}

#[tokio::test]
async fn concurrency_page_uses_configured_server() {
    let console = Console::captured();
    let config = TourConfig {
        pages: vec![Page::Concurrency],
        server: "backup".to_string(),
        ..TourConfig::default()
    };
    let report = ExampleRunner::standard(config).run(&console).unwrap();
    report.finish().await.unwrap();

    let lines = console.lines();
    assert!(lines.contains(&"Connecting to backup in the background".to_string()));
    assert!(lines.contains(&"Hello Guest, user ID 501".to_string()));
}

#[test]
fn concurrency_page_outside_runtime_fails() {
    let console = Console::captured();
    let result = ExampleRunner::standard(config_for(&[Page::Concurrency])).run(&console);
    assert!(result.is_err());
}
