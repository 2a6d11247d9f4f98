use queryhaus::prelude::*;
use serde_json::{json, Value};

fn seed_members(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "member_id": i as i64,
                "username": format!("member{}", i),
                "age": (i % 60) as i64,
                "team_name": if i % 2 == 0 { "teamA" } else { "teamB" },
            })
        })
        .collect()
}

async fn run_tactic(
    tactic: PageTactic,
    rows: Vec<Value>,
    window: PageWindow,
) -> anyhow::Result<()> {
    let searcher = Searcher::new(
        MemoryPort::new(rows),
        Projection::new(["member_id", "username", "age", "team_name"]),
    );
    let filter = FilterSpec::new();
    let order = OrderSpec::new().asc("member_id");

    let page = match tactic {
        PageTactic::Eager => searcher.search_page(&filter, &order, window).await?,
        PageTactic::Split => searcher.search_page_split(&filter, &order, window).await?,
        PageTactic::Adaptive => searcher.search_page_adaptive(&filter, &order, window).await?,
    };

    println!(
        "   {:?}: {} rows, total {}, page calls {}, count calls {}",
        tactic,
        page.len(),
        page.total(),
        searcher.port().page_calls(),
        searcher.port().count_calls()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("🚀 Pagination tactic comparison\n");

    let tactics = [PageTactic::Eager, PageTactic::Split, PageTactic::Adaptive];

    println!("📄 7 rows, window offset 0 limit 10 (underfilled first page):");
    for tactic in tactics {
        run_tactic(tactic, seed_members(7), PageWindow::first(10)?).await?;
    }

    println!("\n📄 100 rows, window offset 0 limit 10 (full page):");
    for tactic in tactics {
        run_tactic(tactic, seed_members(100), PageWindow::first(10)?).await?;
    }

    println!("\n📄 100 rows, window offset 95 limit 10 (last page):");
    for tactic in tactics {
        run_tactic(tactic, seed_members(100), PageWindow::new(95, 10)?).await?;
    }

    println!("\n✅ Identical pages, different work against the store");
    Ok(())
}
