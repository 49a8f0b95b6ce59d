use stencil::answers::{
    defaults_from_lookup, first_defined, normalize_yes_no, AnswerContext, Presets, YesNo,
};
use stencil::cli::Args;
use stencil::error::Result;
use stencil::prompt::Prompter;

struct PanicPrompter;

impl Prompter for PanicPrompter {
    fn input(&self, question: &str, _default: &str) -> Result<String> {
        panic!("unexpected interactive prompt: {}", question);
    }
}

struct ScriptedPrompter(&'static str);

impl Prompter for ScriptedPrompter {
    fn input(&self, _question: &str, _default: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

#[test]
fn test_normalize_yes_spellings() {
    for input in ["y", "yes", "true", "1", "Y", "YES", "True", " yes "] {
        assert_eq!(normalize_yes_no(input), Some(YesNo::Yes), "input: {:?}", input);
    }
}

#[test]
fn test_normalize_no_spellings() {
    for input in ["n", "no", "false", "0", "N", "NO", "False", "\tno\n"] {
        assert_eq!(normalize_yes_no(input), Some(YesNo::No), "input: {:?}", input);
    }
}

#[test]
fn test_normalize_unrecognized_is_undefined() {
    for input in ["", "maybe", "yep", "nope", "2", "on", "off"] {
        assert_eq!(normalize_yes_no(input), None, "input: {:?}", input);
    }
}

#[test]
fn test_first_defined_picks_highest_priority() {
    assert_eq!(first_defined([None, Some("env"), Some("default")]), Some("env"));
    assert_eq!(first_defined([Some("flag"), Some("env")]), Some("flag"));
    assert_eq!(first_defined::<&str>([None, None]), None);
}

#[test]
fn test_presets_from_lookup() {
    let presets = Presets::from_lookup(|key| match key {
        "STENCIL_NAME" => Some("demo".to_string()),
        "STENCIL_INSTALL" => Some("yes".to_string()),
        "STENCIL_GIT" => Some("bogus".to_string()),
        _ => None,
    });

    assert_eq!(presets.name.as_deref(), Some("demo"));
    assert_eq!(presets.install, Some(YesNo::Yes));
    // Unrecognized environment values stay undefined.
    assert_eq!(presets.git, None);
    assert_eq!(presets.description, None);
}

#[test]
fn test_presets_flags_take_precedence_over_env() {
    let flags = Presets { name: Some("from-flag".to_string()), ..Presets::default() };
    let env = Presets {
        name: Some("from-env".to_string()),
        description: Some("env description".to_string()),
        ..Presets::default()
    };

    let merged = flags.merged_with(env);
    assert_eq!(merged.name.as_deref(), Some("from-flag"));
    assert_eq!(merged.description.as_deref(), Some("env description"));
}

#[test]
fn test_presets_from_args_booleans() {
    let args = Args { skip_install: true, force: true, ..Args::default() };
    let presets = Presets::from_args(&args);

    assert_eq!(presets.install, Some(YesNo::No));
    assert_eq!(presets.overwrite, Some(YesNo::Yes));
    assert_eq!(presets.changesets, None);
}

#[test]
fn test_presets_from_args_unrecognized_value_means_yes() {
    let args = Args {
        install: Some("bogus".to_string()),
        changesets: Some("whatever".to_string()),
        ..Args::default()
    };
    let presets = Presets::from_args(&args);

    assert_eq!(presets.install, Some(YesNo::Yes));
    assert_eq!(presets.changesets, Some(YesNo::Yes));
}

#[test]
fn test_presets_from_args_negative_aliases_win() {
    let args = Args {
        no_changesets: true,
        no_git: true,
        changesets: Some("y".to_string()),
        git: Some("y".to_string()),
        ..Args::default()
    };
    let presets = Presets::from_args(&args);

    assert_eq!(presets.changesets, Some(YesNo::No));
    assert_eq!(presets.git, Some(YesNo::No));
}

#[test]
fn test_defaults_from_lookup() {
    assert!(defaults_from_lookup(|_| Some("1".to_string())));
    assert!(defaults_from_lookup(|_| Some("true".to_string())));
    assert!(!defaults_from_lookup(|_| Some("no".to_string())));
    assert!(!defaults_from_lookup(|_| Some("bogus".to_string())));
    assert!(!defaults_from_lookup(|_| None));
}

#[test]
fn test_ask_preset_wins_without_prompting() {
    let ctx = AnswerContext {
        presets: Presets::default(),
        use_defaults: false,
        prompter: &PanicPrompter,
    };

    let answer = ctx.ask(Some("preset-value".to_string()), "Project name", "fallback").unwrap();
    assert_eq!(answer, "preset-value");
}

#[test]
fn test_ask_defaults_mode_never_blocks() {
    let ctx = AnswerContext {
        presets: Presets::default(),
        use_defaults: true,
        prompter: &PanicPrompter,
    };

    let answer = ctx.ask(None, "Project name", "my-stencil-app").unwrap();
    assert_eq!(answer, "my-stencil-app");
}

#[test]
fn test_ask_echoes_preset_with_source_annotation() {
    let ctx = AnswerContext {
        presets: Presets::default(),
        use_defaults: false,
        prompter: &PanicPrompter,
    };

    let mut out = Vec::new();
    let answer = ctx
        .ask_to(&mut out, Some("demo".to_string()), "Project name", "fallback")
        .unwrap();

    assert_eq!(answer, "demo");
    assert_eq!(String::from_utf8(out).unwrap(), "Project name: demo [preset]\n");
}

#[test]
fn test_ask_echoes_default_with_source_annotation() {
    let ctx = AnswerContext {
        presets: Presets::default(),
        use_defaults: true,
        prompter: &PanicPrompter,
    };

    let mut out = Vec::new();
    let answer = ctx.ask_to(&mut out, None, "Project name", "my-stencil-app").unwrap();

    assert_eq!(answer, "my-stencil-app");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Project name: my-stencil-app [default]\n"
    );
}

#[test]
fn test_ask_interactive_resolution_echoes_nothing() {
    let ctx = AnswerContext {
        presets: Presets::default(),
        use_defaults: false,
        prompter: &ScriptedPrompter("typed-answer"),
    };

    let mut out = Vec::new();
    let answer = ctx.ask_to(&mut out, None, "Project name", "fallback").unwrap();

    assert_eq!(answer, "typed-answer");
    assert!(out.is_empty());
}

#[test]
fn test_ask_interactive_uses_prompter() {
    let ctx = AnswerContext {
        presets: Presets::default(),
        use_defaults: false,
        prompter: &ScriptedPrompter("typed-answer"),
    };

    let answer = ctx.ask(None, "Project name", "fallback").unwrap();
    assert_eq!(answer, "typed-answer");
}
