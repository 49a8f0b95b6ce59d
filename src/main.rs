//! stencil's main application entry point and orchestration logic.
//! Gathers answers, prepares the target directory, copies the template,
//! applies the post-copy patches and runs the optional external actions.

use stencil::{
    answers::{
        defaults_from_env, normalize_yes_no, AnswerContext, Answers, Presets, YesNo,
    },
    cli::{get_args, Args},
    constants::{
        DEFAULT_CHANGESETS, DEFAULT_DESCRIPTION, DEFAULT_GIT, DEFAULT_INSTALL,
        DEFAULT_PROJECT_NAME,
    },
    copier::{copy_template, prepare_target_dir, template_root},
    env as runtime_env,
    error::{default_error_handler, Result},
    filter::excluded_paths,
    logger::init_logger,
    patch::{
        cleanup_lockfiles, ensure_gitignore, patch_manifest, remove_scaffold_artifacts,
        reset_readme, sync_changeset_assets,
    },
    pm::PackageManager,
    prompt::DialoguerPrompter,
    runner::{init_git_repository, install_dependencies},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Resolves every configuration question in order.
fn collect_answers(ctx: &AnswerContext) -> Result<Answers> {
    let project_name =
        ctx.ask(ctx.presets.name.clone(), "Project name", DEFAULT_PROJECT_NAME)?;
    let description = ctx.ask(
        ctx.presets.description.clone(),
        "Project description",
        DEFAULT_DESCRIPTION,
    )?;

    let package_manager_answer = ctx.ask(
        ctx.presets.package_manager.clone(),
        "Preferred package manager [pnpm/npm/yarn/bun]",
        PackageManager::ALL[0].command(),
    )?;
    let package_manager = PackageManager::parse(&package_manager_answer);

    let install_answer = ctx.ask(
        ctx.presets.install.map(|value| value.as_str().to_string()),
        &format!("Install dependencies with {}? [y/N]", package_manager),
        DEFAULT_INSTALL,
    )?;
    let install = normalize_yes_no(&install_answer) == Some(YesNo::Yes);

    let changesets_answer = ctx.ask(
        ctx.presets.changesets.map(|value| value.as_str().to_string()),
        "Include Changesets release tooling? [y/N]",
        DEFAULT_CHANGESETS,
    )?;
    let changesets = normalize_yes_no(&changesets_answer) == Some(YesNo::Yes);

    // Git defaults on: anything short of an explicit no initializes a repository.
    let git_answer = ctx.ask(
        ctx.presets.git.map(|value| value.as_str().to_string()),
        "Initialize a git repository? [Y/n]",
        DEFAULT_GIT,
    )?;
    let git = normalize_yes_no(&git_answer) != Some(YesNo::No);

    Ok(Answers { project_name, description, package_manager, install, changesets, git })
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the declared runtime environment
/// 2. Resolves all configuration answers
/// 3. Prepares the target directory (create, or confirm-and-clear)
/// 4. Copies the filtered template tree
/// 5. Applies the post-copy patches
/// 6. Best-effort: installs dependencies and initializes git
fn run(args: Args) -> Result<()> {
    runtime_env::load()?;

    let use_defaults = args.defaults || defaults_from_env();
    let presets = Presets::from_args(&args).merged_with(Presets::from_env());
    let prompter = DialoguerPrompter::new();
    let ctx = AnswerContext { presets, use_defaults, prompter: &prompter };

    println!("Welcome to the stencil project generator!\n");

    let answers = collect_answers(&ctx)?;

    let template_root = template_root()?;
    let target_dir = std::env::current_dir()?.join(&answers.project_name);
    prepare_target_dir(&target_dir, &ctx)?;

    println!("\nCopying files into {}...", target_dir.display());
    let excluded = excluded_paths()?;
    copy_template(&template_root, &target_dir, &excluded)?;

    ensure_gitignore(&target_dir, &template_root)?;
    sync_changeset_assets(&target_dir, &template_root, answers.changesets)?;
    patch_manifest(&target_dir, &answers)?;
    reset_readme(&target_dir, &answers.project_name)?;
    remove_scaffold_artifacts(&target_dir)?;
    cleanup_lockfiles(&target_dir, answers.package_manager)?;

    if answers.install {
        println!("\nInstalling dependencies with {}...", answers.package_manager);
        if let Err(err) = install_dependencies(&target_dir, answers.package_manager) {
            log::warn!("Failed to install dependencies automatically: {}", err);
            log::warn!(
                "You can install them manually with `{}`.",
                answers.package_manager.install_instruction()
            );
        }
    }

    if answers.git {
        println!("\nInitializing git repository...");
        if let Err(err) = init_git_repository(&target_dir) {
            log::warn!("Failed to initialize git repository automatically: {}", err);
            log::warn!("You can run `git init` manually when you are ready.");
        }
    }

    print_next_steps(&answers);
    Ok(())
}

/// Closing banner with the manual follow-up commands.
fn print_next_steps(answers: &Answers) {
    println!("\nAll set! Next steps:");
    println!("  1. cd {}", answers.project_name);

    let mut step = 2;
    if !answers.install {
        println!("  {}. {}", step, answers.package_manager.install_instruction());
        step += 1;
    }
    println!("  {}. {}", step, answers.package_manager.dev_instruction());

    if !answers.git {
        println!("  - Run `git init` when you want to start version control.");
    }
    if answers.changesets {
        println!("  - Manage releases with: pnpm changeset");
    }

    println!("\nHappy hacking!");
}
