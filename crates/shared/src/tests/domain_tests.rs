use crate::{Profile, Section, SectionParseError, TextFragments};

#[test]
fn parses_known_section_names() {
    for section in Section::ALL {
        assert_eq!(section.name().parse::<Section>(), Ok(section));
    }
}

#[test]
fn rejects_unknown_section_names() {
    assert_eq!(
        "projects".parse::<Section>(),
        Err(SectionParseError::Unknown("projects".to_string()))
    );
    assert!("Summary".parse::<Section>().is_err());
}

#[test]
fn fragments_join_without_separator() {
    let fragments = TextFragments::new(["one", " two", "\nthree"]);
    assert_eq!(fragments.joined(), "one two\nthree");
}

#[test]
fn fragments_accept_bare_string() {
    let fragments: TextFragments = serde_json::from_str(r#""single line""#).expect("string");
    assert_eq!(fragments.fragments(), ["single line".to_string()]);
}

#[test]
fn builtin_default_matches_reference_document() {
    let profile = Profile::builtin_default();
    assert_eq!(profile.name, "First Last");
    assert_eq!(profile.email, "name@email.com");
    assert_eq!(profile.phone, "(123) 456-7890");
    assert_eq!(profile.about_text(), "I am a person who does stuff.");
    assert_eq!(profile.skills.len(), 1);
    assert_eq!(profile.skills[0].icon, "python.svg");
    assert_eq!(profile.skills[0].label, "Python");
    assert_eq!(profile.section_text(Section::Experience), "A\nB\n\n");
    assert_eq!(
        profile.section_text(Section::Education),
        "BA, School of Stuff\nPhD, University of Things"
    );
    assert!(profile.summary.is_empty());
    assert_eq!(profile.window_title(), "First Last's CV");
}
