use super::*;
use shared::domain::LooseNumber;

fn place(order: u64, name: &str) -> Place {
    Place {
        order: Some(LooseNumber::from(order)),
        name: Some(name.to_string()),
        address: Some(format!("{name}, адрес")),
        ..Place::default()
    }
}

fn full_route() -> RouteResponse {
    RouteResponse {
        overview: Some("Прогулка по старому городу".into()),
        total_minutes: Some(LooseNumber::from(150u64)),
        interest_categories: Some(vec!["история".into(), "архитектура".into()]),
        places: Some(vec![
            Place {
                visit_minutes: Some(LooseNumber::from(45u64)),
                why_chosen: Some("Сердце города".into()),
                what_to_see: Some("Дмитриевская башня".into()),
                ..place(1, "Кремль")
            },
            place(2, "Рождественская улица"),
            place(3, "Стрелка"),
        ]),
        tips: Some(vec!["Возьмите воду".into(), "Начинайте утром".into()]),
        success: Some(true),
        ..RouteResponse::default()
    }
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("обычный текст"), "обычный текст");
}

#[test]
fn renders_sections_in_fixed_order() {
    let html = render_route(&full_route());

    let overview = html.find("route-overview").expect("overview");
    let tags = html.find("interest-tags").expect("tags");
    let places = html.find("route-place").expect("places");
    let tips = html.find("tips-section").expect("tips");
    assert!(overview < tags && tags < places && places < tips);

    assert!(html.contains("<strong>Общее время:</strong> 150 минут"));
    assert!(html.contains("<strong>Мест:</strong> 3"));
    assert_eq!(html.matches(r#"class="interest-tag""#).count(), 2);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[test]
fn renders_one_block_per_place_in_input_order() {
    let route = RouteResponse {
        places: Some(vec![place(3, "Третье"), place(1, "Первое"), place(7, "Седьмое")]),
        ..RouteResponse::default()
    };
    let html = render_route(&route);

    assert_eq!(html.matches(r#"<div class="route-place">"#).count(), 3);
    let numbers: Vec<&str> = html
        .split(r#"<div class="place-number">"#)
        .skip(1)
        .map(|rest| rest.split('<').next().unwrap_or_default())
        .collect();
    assert_eq!(numbers, ["3", "1", "7"]);

    let first = html.find("Третье").expect("first");
    let second = html.find("Первое").expect("second");
    let third = html.find("Седьмое").expect("third");
    assert!(first < second && second < third);
}

#[test]
fn order_numbers_render_verbatim() {
    let route = RouteResponse {
        places: Some(vec![Place {
            order: Some(LooseNumber::from("2a")),
            ..Place::default()
        }]),
        ..RouteResponse::default()
    };
    let html = render_route(&route);
    assert!(html.contains(r#"<div class="place-number">2a</div>"#));
}

#[test]
fn missing_overview_omits_overview_block() {
    let mut route = full_route();
    route.overview = None;
    assert!(!render_route(&route).contains("route-overview"));

    route.overview = Some(String::new());
    assert!(!render_route(&route).contains("route-overview"));
}

#[test]
fn overview_falls_back_when_minutes_or_places_missing() {
    let route = RouteResponse {
        overview: Some("Коротко".into()),
        ..RouteResponse::default()
    };
    let html = render_route(&route);

    assert!(html.contains("<strong>Общее время:</strong> не указано минут"));
    assert!(html.contains("<strong>Мест:</strong> 0"));
    assert!(!html.contains("route-place"));
}

#[test]
fn zero_total_minutes_counts_as_missing() {
    let route = RouteResponse {
        overview: Some("Коротко".into()),
        total_minutes: Some(LooseNumber::from(0u64)),
        ..RouteResponse::default()
    };
    assert!(render_route(&route).contains("не указано минут"));
}

#[test]
fn empty_or_absent_categories_omit_tag_block() {
    let mut route = full_route();
    route.interest_categories = Some(Vec::new());
    assert!(!render_route(&route).contains("interest-tags"));

    route.interest_categories = None;
    assert!(!render_route(&route).contains("interest-tags"));
}

#[test]
fn empty_tips_omit_tips_block() {
    let mut route = full_route();
    route.tips = Some(Vec::new());
    assert!(!render_route(&route).contains("tips-section"));
}

#[test]
fn optional_place_fields_are_omitted_when_absent() {
    let route = RouteResponse {
        places: Some(vec![place(1, "Только название")]),
        ..RouteResponse::default()
    };
    let html = render_route(&route);

    assert!(!html.contains("place-time"));
    assert!(!html.contains("place-reason"));
    assert!(!html.contains("place-todo"));
}

#[test]
fn optional_place_fields_render_when_present() {
    let html = render_route(&full_route());

    assert!(html.contains(r#"<span class="place-time">⏱️ 45 минут</span>"#));
    assert!(html.contains("<p>Сердце города</p>"));
    assert!(html.contains("<p>Дмитриевская башня</p>"));
}

#[test]
fn external_text_is_never_interpreted_as_markup() {
    let hostile = "<script>alert(1)</script> & <b>";
    let route = RouteResponse {
        overview: Some(hostile.into()),
        interest_categories: Some(vec![hostile.into()]),
        places: Some(vec![Place {
            order: Some(LooseNumber::from("<i>1</i>")),
            name: Some(hostile.into()),
            address: Some(hostile.into()),
            visit_minutes: Some(LooseNumber::from("<u>")),
            why_chosen: Some(hostile.into()),
            what_to_see: Some(hostile.into()),
        }]),
        tips: Some(vec![hostile.into()]),
        ..RouteResponse::default()
    };
    let html = render_route(&route);

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(!html.contains("<i>"));
    assert!(!html.contains("<u>"));
    assert!(!html.contains(" & "));
    assert_eq!(html.matches("&lt;script&gt;").count(), 7);
}

#[test]
fn empty_response_renders_nothing() {
    assert_eq!(render_route(&RouteResponse::default()), "");
}
