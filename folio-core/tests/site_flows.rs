use folio_core::catalog::{Catalog, ContentSource, StaticSource};
use folio_core::forms::{ContactField, ContactForm, ValidationError};
use folio_core::navigation::{NavigationShell, Route, RouteError, View};
use folio_core::sections::{Section, SectionId};

fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog is valid")
}

#[test]
fn unknown_skill_renders_the_default_entry() {
    let catalog = catalog();
    let shell = NavigationShell::starting_at("/skill/cobol");

    let View::Skill(page) = shell.resolve(&catalog) else {
        panic!("expected a skill page for {}", shell.current());
    };
    assert_eq!(page.name(), "AWS (Amazon Web Services)");
    assert!(page.cta_body().contains("COBOL"));
}

#[test]
fn skill_cards_navigate_to_their_pages() {
    let catalog = catalog();
    let mut shell = NavigationShell::new();

    let View::Home(home) = shell.resolve(&catalog) else {
        panic!("expected home");
    };
    let Some(Section::Skills(skills)) = home.section(SectionId::Skills) else {
        panic!("home has a skills section");
    };
    let linux = skills.cards[1].route.clone();

    shell.navigate_to(linux);
    assert_eq!(shell.current().to_path(), "/skill/linux");
    // Linux has no detail entry in the built-in catalog.
    let View::Skill(page) = shell.resolve(&catalog) else {
        panic!("expected a skill page");
    };
    assert!(page.fell_back());

    assert!(shell.back());
    assert!(shell.current().is_home());
}

#[test]
fn route_parse_and_format_are_inverse() {
    let routes = [
        Route::home(),
        Route::section(SectionId::Content),
        Route::Skill(None),
        Route::skill(folio_model::SkillSlug::from_name("Kubernetes")),
        Route::skill(folio_model::SkillSlug::from_name("Node JS")),
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.to_path()), Ok(route.clone()));
    }
    assert!(matches!(Route::parse("/projects/1"), Err(RouteError::NotFound(_))));
}

#[test]
fn contact_form_scenario() {
    let mut form = ContactForm::new();
    form.set_field(ContactField::Name, "");
    form.set_field(ContactField::Email, "not-an-email");
    form.set_field(ContactField::Message, "abc");

    let errors = form.submit().expect_err("invalid form must not confirm");
    let messages: Vec<String> = errors.iter().map(|(_, error)| error.to_string()).collect();
    assert_eq!(
        messages,
        ["Name is required", "Invalid email", "Message must be at least 10 characters"]
    );

    form.set_field(ContactField::Name, "Jane Doe");
    form.set_field(ContactField::Email, "jane@example.com");
    form.set_field(ContactField::Message, "This is a sufficiently long message.");
    assert!(form.errors().is_empty());

    let confirmation = form.submit().expect("valid form confirms");
    assert_eq!(
        confirmation.message,
        "Thank you for your message! I'll get back to you soon."
    );
    assert_eq!(confirmation.request.name, "Jane Doe");
    assert_eq!(confirmation.request.email, "jane@example.com");
    assert_eq!(
        confirmation.request.message,
        "This is a sufficiently long message."
    );
    assert_eq!(form.value(ContactField::Name), "");
    assert_eq!(form.value(ContactField::Email), "");
    assert_eq!(form.value(ContactField::Message), "");
    assert_eq!(form.error(ContactField::Name), None::<ValidationError>);
}

#[test]
fn static_source_hands_back_its_catalog() {
    let source = StaticSource(catalog());
    let loaded = source.load().expect("static source cannot fail");
    assert_eq!(loaded, catalog());
    assert_eq!(source.describe(), "static catalog");
}
