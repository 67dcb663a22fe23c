//! Profile commands: status, languages, goals, achievements, leagues, preferences.

use anyhow::{bail, Result};

use lingoquest::achievements::{all_achievements, AggregateStats};
use lingoquest::catalog::{find_language, language_name, LANGUAGES};
use lingoquest::leagues::League;
use lingoquest::profile::energy;

use super::{Context, PrefsArgs};

pub fn status(ctx: &mut Context) -> Result<()> {
    let profile = ctx.store.read();
    let settings = *ctx.store.energy_settings();

    let who = if profile.is_guest {
        "Guest".to_string()
    } else {
        profile.username.clone().unwrap_or_else(|| profile.name.clone())
    };
    println!("{} {}", profile.avatar, who);
    println!(
        "Streak: {} day(s)   League: {} {}",
        profile.streak,
        profile.current_league.icon(),
        profile.current_league
    );

    print!("Energy: {}/{}", profile.energy, settings.max_energy);
    match energy::time_until_next_point(&profile, &settings, chrono::Utc::now()) {
        Some(wait) => println!("   next in {} min", wait.num_minutes() + 1),
        None => println!(),
    }

    match profile.current_progress() {
        Some(progress) => println!(
            "Learning {}: level {}, {} XP ({} to next), {} lessons",
            language_name(&progress.language_code),
            progress.level,
            progress.xp,
            progress.xp_to_next_level(),
            progress.lessons_completed
        ),
        None => println!("No language selected. Try `lingoquest languages`."),
    }

    let stats = AggregateStats::from_progress(&profile.progress, profile.streak);
    println!(
        "Total: {} XP across {} language(s), language score {}",
        stats.total_xp,
        stats.language_count,
        stats.language_score()
    );

    Ok(())
}

pub fn languages(ctx: &mut Context) -> Result<()> {
    let profile = ctx.store.read();

    for lang in LANGUAGES {
        let marker = if profile.current_language_code.as_deref() == Some(lang.code) {
            "*"
        } else {
            " "
        };
        match profile.progress.get(lang.code) {
            Some(p) => println!("{} {} {:<6} {:<18} level {}", marker, lang.flag, lang.code, lang.name, p.level),
            None => println!("{} {} {:<6} {}", marker, lang.flag, lang.code, lang.name),
        }
    }

    Ok(())
}

pub fn select(ctx: &mut Context, code: &str) -> Result<()> {
    let Some(lang) = find_language(code) else {
        bail!("Unknown language code: {}", code);
    };

    let profile = ctx.store.select_language(lang.code)?;
    let level = profile.current_progress().map(|p| p.level).unwrap_or(1);
    println!("{} Now learning {} (level {})", lang.flag, lang.name, level);
    Ok(())
}

pub fn goals(ctx: &mut Context) -> Result<()> {
    let profile = ctx.store.read();

    for goal in &profile.daily_goals {
        let check = if goal.completed { "✔" } else { " " };
        println!(
            "[{}] {:<22} {:>3}/{:<3} +{} XP",
            check,
            goal.title,
            goal.current.min(goal.target),
            goal.target,
            goal.reward_xp
        );
    }

    Ok(())
}

pub fn achievements(ctx: &mut Context) -> Result<()> {
    let profile = ctx.store.read();
    let stats = AggregateStats::from_progress(&profile.progress, profile.streak);

    for achievement in all_achievements() {
        if profile.has_achievement(&achievement.id) {
            println!("{} {:<18} {}", achievement.icon, achievement.title, achievement.description);
        } else {
            println!(
                "🔒 {:<18} {} ({:.0}%)",
                achievement.title,
                achievement.description,
                achievement.percentage(&stats)
            );
        }
    }

    Ok(())
}

pub fn leagues(ctx: &mut Context) -> Result<()> {
    let profile = ctx.store.read();

    for league in League::ALL.iter().rev() {
        let marker = if *league == profile.current_league { "*" } else { " " };
        println!(
            "{} {} {:<9} {}",
            marker,
            league.icon(),
            league.display_name(),
            league.zone_summary()
        );
    }

    Ok(())
}

pub fn prefs(ctx: &mut Context, args: PrefsArgs) -> Result<()> {
    let mut preferences = ctx.store.read().preferences;
    let before = preferences.clone();

    if let Some(v) = args.auto_difficulty {
        preferences.auto_difficulty = v;
    }
    if let Some(v) = args.streak_freeze {
        preferences.enable_streak_freeze = v;
    }
    if let Some(v) = args.sound_effects {
        preferences.enable_sound_effects = v;
    }
    if let Some(v) = args.show_characters {
        preferences.show_characters = v;
    }
    if let Some(v) = args.daily_goal_xp {
        preferences.daily_goal_xp = v;
    }
    if let Some(v) = args.lesson_duration {
        preferences.lesson_duration = v;
    }
    if let Some(v) = args.dark_mode {
        preferences.dark_mode = v;
    }

    let preferences = if preferences != before {
        ctx.store.update_preferences(preferences)?.preferences
    } else {
        preferences
    };

    println!("auto difficulty:   {}", preferences.auto_difficulty);
    println!("streak freeze:     {}", preferences.enable_streak_freeze);
    println!("sound effects:     {}", preferences.enable_sound_effects);
    println!("show characters:   {}", preferences.show_characters);
    println!("daily goal:        {} XP", preferences.daily_goal_xp);
    println!("lesson length:     {} questions", preferences.lesson_duration);
    println!("dark mode:         {}", preferences.dark_mode);
    Ok(())
}

pub fn onboard(ctx: &mut Context, name: &str, avatar: Option<&str>, native: Option<&str>) -> Result<()> {
    if let Some(code) = native {
        if find_language(code).is_none() {
            bail!("Unknown language code: {}", code);
        }
    }

    let profile = ctx.store.complete_onboarding(name, avatar, native)?;
    println!("Welcome, {} {}!", profile.avatar, profile.name);
    Ok(())
}
