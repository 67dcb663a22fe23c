//! Lesson commands: taking lessons, drills, recording results and downloads.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use chrono::Utc;

use lingoquest::achievements::find_achievement;
use lingoquest::catalog::{character_groups, find_group, language_name};
use lingoquest::lessons::{
    choose_difficulty, load_lesson, ContentProvider, GeminiClient, LessonRequest, LessonSession,
    LoadedLesson, OfflineLesson, OfflineLessonCache,
};
use lingoquest::profile::types::Difficulty;
use lingoquest::profile::{StoreError, UserProfile};
use lingoquest::{LessonOutcome, ReconcileOutcome};

use super::{CompleteArgs, Context};

/// Take a lesson or practice session in the current language.
pub async fn start(ctx: &mut Context, practice: bool, requested: Option<Difficulty>) -> Result<()> {
    let profile = ctx.store.read();
    let code = current_language(&profile)?;

    if !practice {
        match ctx.store.consume_energy() {
            Ok(_) => {}
            Err(StoreError::OutOfEnergy) => {
                println!("Out of energy. Practice is free, or wait for energy to refill.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }

    let request = build_request(ctx, &profile, &code, practice, Vec::new(), requested);
    let client = GeminiClient::new(&ctx.config.ai)?;
    let loaded = fetch(ctx, &client, &request, &code).await;

    run(ctx, &client, loaded, &code, practice).await
}

/// Drill a character group, or list the groups.
pub async fn drill(ctx: &mut Context, group: Option<&str>) -> Result<()> {
    let profile = ctx.store.read();
    let code = current_language(&profile)?;

    let groups = character_groups(&code);
    if groups.is_empty() {
        println!("{} has no character drills.", language_name(&code));
        return Ok(());
    }

    let Some(group_id) = group else {
        for g in groups {
            let preview: Vec<&str> = g.characters.iter().take(5).map(|c| c.symbol).collect();
            println!("{:<20} {:<28} {}", g.id, g.name, preview.join(" "));
        }
        return Ok(());
    };

    let group = find_group(&code, group_id)
        .ok_or_else(|| anyhow!("Unknown character group: {}", group_id))?;

    let request = build_request(ctx, &profile, &code, true, group.symbols(), None);
    let client = GeminiClient::new(&ctx.config.ai)?;
    let loaded = fetch(ctx, &client, &request, &code).await;

    run(ctx, &client, loaded, &code, true).await
}

/// Record a lesson result without taking it here.
pub fn complete(ctx: &mut Context, args: CompleteArgs) -> Result<()> {
    if args.correct > args.total {
        bail!("Correct answers ({}) exceed questions ({})", args.correct, args.total);
    }

    let code = match args.lang {
        Some(code) => code,
        None => current_language(&ctx.store.read())?,
    };

    let outcome = LessonOutcome::scored(&code, args.total, args.correct, args.weak, args.strong, args.practice);
    let result = match ctx.store.record_lesson(&outcome) {
        Ok(result) => result,
        Err(StoreError::OutOfEnergy) => {
            println!("Out of energy. Record it as practice, or wait for energy to refill.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    print_summary(&outcome, &result);
    Ok(())
}

/// Generate lessons now and queue them for offline use.
pub async fn download(ctx: &mut Context, count: u32) -> Result<()> {
    let profile = ctx.store.read();
    let code = current_language(&profile)?;

    let client = GeminiClient::new(&ctx.config.ai)?;
    if !client.has_api_key() {
        bail!("Downloading lessons needs an API key (set GEMINI_API_KEY or ai.api_key)");
    }

    let request = build_request(ctx, &profile, &code, false, Vec::new(), None);
    let capacity = ctx.config.lessons.offline_queue_size;
    let mut saved = 0;

    for _ in 0..count {
        match client.generate_lesson(&request).await {
            Ok(lesson) => {
                let mut cache = OfflineLessonCache::with_capacity(ctx.store.backend_mut(), capacity);
                cache.save(OfflineLesson::new(lesson, &code, Utc::now()))?;
                saved += 1;
            }
            Err(e) => {
                tracing::warn!("Download failed: {}", e);
                break;
            }
        }
    }

    let cache = OfflineLessonCache::with_capacity(ctx.store.backend_mut(), capacity);
    println!(
        "Saved {} lesson(s). {} available offline for {}.",
        saved,
        cache.count(&code)?,
        language_name(&code)
    );
    Ok(())
}

fn current_language(profile: &UserProfile) -> Result<String> {
    profile
        .current_language_code
        .clone()
        .ok_or_else(|| anyhow!("No language selected. Use `lingoquest select <code>` first."))
}

fn build_request(
    ctx: &Context,
    profile: &UserProfile,
    code: &str,
    practice: bool,
    focus_characters: Vec<String>,
    requested: Option<Difficulty>,
) -> LessonRequest {
    let progress = profile.progress.get(code);
    let level = progress.map(|p| p.level).unwrap_or(1);

    let native = if profile.native_language_code.is_empty() {
        ctx.config.lessons.native_language_name.clone()
    } else {
        language_name(&profile.native_language_code)
    };

    let mut request = LessonRequest::new(&language_name(code), &native, level);
    request.weak_areas = progress.map(|p| p.weak_areas.clone()).unwrap_or_default();
    request.is_practice = practice;
    request.difficulty = choose_difficulty(&profile.preferences, level, !focus_characters.is_empty(), requested);
    request.focus_characters = focus_characters;
    request.question_count = LessonRequest::question_count_for(profile.preferences.lesson_duration);
    request
}

async fn fetch(ctx: &mut Context, client: &GeminiClient, request: &LessonRequest, code: &str) -> LoadedLesson {
    let capacity = ctx.config.lessons.offline_queue_size;
    let mut cache = OfflineLessonCache::with_capacity(ctx.store.backend_mut(), capacity);
    load_lesson(client, &mut cache, request, code).await
}

async fn run(
    ctx: &mut Context,
    client: &GeminiClient,
    loaded: LoadedLesson,
    code: &str,
    practice: bool,
) -> Result<()> {
    let offline = loaded.source.is_offline();
    if offline {
        println!("(offline mode: translations are checked strictly)");
    }
    println!("\n== {} ==", loaded.lesson.title);
    if !loaded.lesson.description.is_empty() {
        println!("{}", loaded.lesson.description);
    }

    let total = loaded.lesson.len();
    let mut session = LessonSession::new(loaded.lesson, code, practice, offline);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(question) = session.current().cloned() {
        println!("\n[{}/{}] {} ({})", session.position() + 1, total, question.question_text, question.topic());
        if question.question_type.is_choice() {
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("Input closed before the lesson finished");
        };
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("s") || input.eq_ignore_ascii_case("skip") {
            session.skip();
            println!("Skipped.");
            continue;
        }

        // Numbered options can be picked by index
        let answer = match input.parse::<usize>() {
            Ok(n) if question.question_type.is_choice() && (1..=question.options.len()).contains(&n) => {
                question.options[n - 1].clone()
            }
            _ => input.to_string(),
        };

        let feedback = session.answer(&answer, client).await?;
        if feedback.correct {
            println!("Correct!");
        } else {
            println!("Not quite. Answer: {}", feedback.correct_answer);
        }
        if !feedback.explanation.is_empty() {
            println!("  {}", feedback.explanation);
        }
    }

    let outcome = session.finish();
    let result = ctx.store.complete_lesson(&outcome);
    print_summary(&outcome, &result);
    Ok(())
}

fn print_summary(outcome: &LessonOutcome, result: &ReconcileOutcome) {
    println!(
        "\n+{} XP  ({}/{} correct, {}%)",
        outcome.xp_gained,
        outcome.questions_correct,
        outcome.questions_total,
        outcome.accuracy_percent()
    );

    if result.leveled_up {
        if let Some(progress) = result.profile.progress.get(&outcome.language_code) {
            println!("Level up! {} level {}", language_name(&outcome.language_code), progress.level);
        }
    }
    if result.streak_extended {
        println!("🔥 Streak: {} day(s)", result.profile.streak);
    }

    for id in &result.completed_goals {
        if let Some(goal) = result.profile.daily_goals.iter().find(|g| &g.id == id) {
            println!("Daily goal complete: {} (+{} XP)", goal.title, goal.reward_xp);
        }
    }
    for id in &result.new_achievements {
        if let Some(achievement) = find_achievement(id) {
            println!("Achievement unlocked: {} {}", achievement.icon, achievement.title);
        }
    }

    let strong: Vec<&String> = outcome
        .strong_topics
        .iter()
        .filter(|t| !outcome.weak_topics.contains(t))
        .collect();
    if !strong.is_empty() {
        println!("Strong: {}", strong.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", "));
    }
    if !outcome.weak_topics.is_empty() {
        println!("To review: {}", outcome.weak_topics.join(", "));
    }
}
