//! Plain-text session report.

use std::io::{self, Write};

use runtime::SimulationReport;

pub fn render(out: &mut impl Write, report: &SimulationReport) -> io::Result<()> {
    let outcome = report
        .outcome
        .map_or_else(|| "unfinished".to_owned(), |outcome| outcome.to_string());
    let hero = &report.hero;
    let stats = &report.stats;

    writeln!(out, "=== Dungeon report (seed {}) ===", report.seed)?;
    writeln!(out, "outcome:     {outcome} after {} turns", report.turns)?;
    writeln!(
        out,
        "hero:        {} {} ({}/{} hp, atk {}, def {})",
        hero.name,
        if hero.alive { "alive" } else { "dead" },
        hero.health,
        hero.max_health,
        hero.attack,
        hero.defense,
    )?;
    writeln!(
        out,
        "loot:        {} gold, {} items carried",
        hero.gold, hero.inventory
    )?;
    writeln!(out, "suspicion:   {} (peak {})", hero.suspicion, stats.peak_suspicion)?;
    writeln!(
        out,
        "rooms:       {}/{} visited",
        report.rooms_visited, report.rooms_total
    )?;
    writeln!(
        out,
        "combat:      {} kills, {} dealt, {} taken",
        stats.enemies_killed, stats.damage_dealt, stats.damage_taken
    )?;
    writeln!(
        out,
        "items:       {} looted, {} refused, {} potions drunk",
        stats.items_looted, stats.items_refused, stats.potions_used
    )?;
    writeln!(
        out,
        "hazards:     {} traps sprung, {} minions summoned",
        stats.traps_triggered, stats.minions_summoned
    )?;
    writeln!(out, "curse:       {} actions", report.curse_actions)?;
    writeln!(out, "events:      {}", report.events)?;
    Ok(())
}
