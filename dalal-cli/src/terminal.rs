//! Plain-text rendering of dashboard output.

use dalal::metrics::{format_change, format_range};
use dalal::{
    ABSENT, COLUMNS, DetailReport, ExportStatus, Presenter, StatementTable, SummaryTable,
};

pub struct TerminalPresenter {
    json: bool,
}

impl TerminalPresenter {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }
}

fn or_absent<T: ToString>(v: Option<T>) -> String {
    v.map_or_else(|| ABSENT.to_string(), |x| x.to_string())
}

fn heading(title: &str) {
    println!();
    println!("== {title} ==");
}

fn statement(table: &StatementTable) {
    println!("-- {} --", table.kind.title());
    println!("{:<28} {}", "", table.periods.join("  "));
    for line in &table.lines {
        let values: Vec<String> = line.values.iter().map(|v| or_absent(*v)).collect();
        println!("{:<28} {}", line.label, values.join("  "));
    }
}

impl Presenter for TerminalPresenter {
    fn show_detail(&mut self, r: &DetailReport) {
        if self.json {
            match serde_json::to_string_pretty(r) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("cannot render report as JSON: {e}"),
            }
            return;
        }
        let info = r.info.as_ref();
        let snap = r.snapshot.as_ref();

        heading("Company Info");
        println!(
            "{} ({})",
            info.and_then(|i| i.short_name.as_deref()).unwrap_or(ABSENT),
            r.symbol
        );
        println!("Sector:          {}", or_absent(info.and_then(|i| i.sector.as_deref())));
        println!("Industry:        {}", or_absent(info.and_then(|i| i.industry.as_deref())));
        println!("Exchange:        {}", or_absent(info.and_then(|i| i.exchange.as_deref())));
        println!("Market cap:      {}", or_absent(info.and_then(|i| i.market_cap)));
        println!("Beta:            {}", or_absent(info.and_then(|i| i.beta)));
        println!("P/E (trailing):  {}", or_absent(info.and_then(|i| i.trailing_pe)));
        println!("Dividend yield:  {}", or_absent(info.and_then(|i| i.dividend_yield)));
        println!("Website:         {}", or_absent(info.and_then(|i| i.website.as_deref())));

        heading("Price Overview");
        println!("Current price:  {}", or_absent(r.current_price));
        println!("Previous close: {}", or_absent(snap.and_then(|s| s.previous_close)));
        println!("Open:           {}", or_absent(snap.and_then(|s| s.open)));

        heading("Ranges");
        println!(
            "Day range:     {}",
            format_range(snap.and_then(|s| s.day_low), snap.and_then(|s| s.day_high))
        );
        println!(
            "52-week range: {}",
            format_range(
                snap.and_then(|s| s.fifty_two_week_low),
                snap.and_then(|s| s.fifty_two_week_high)
            )
        );

        heading("Performance Overview");
        println!(
            "Today's change:       {}",
            r.todays_change.as_ref().map_or_else(|| ABSENT.to_string(), format_change)
        );
        println!(
            "52-week performance:  {}",
            r.fifty_two_week_performance
                .as_ref()
                .map_or_else(|| ABSENT.to_string(), format_change)
        );

        heading("Historical Price Chart");
        for p in &r.history {
            println!("{}  {}", p.ts.format("%Y-%m-%d"), p.close);
        }

        heading("Latest News");
        for h in &r.news {
            println!("- {} ({})", h.title_or_default(), h.publisher_or_default());
        }

        heading("Financial Statements");
        for t in [
            &r.statements.income,
            &r.statements.balance_sheet,
            &r.statements.cashflow,
        ]
        .into_iter()
        .flatten()
        {
            statement(t);
        }

        heading("Dividends & Stock Splits");
        for d in &r.dividends {
            println!("{}  dividend {}", d.ts.format("%Y-%m-%d"), d.amount);
        }
        for s in &r.splits {
            println!("{}  split {}:{}", s.ts.format("%Y-%m-%d"), s.numerator, s.denominator);
        }

        heading("Analyst Recommendations");
        for rec in &r.recommendations {
            println!(
                "{}  strong buy {} / buy {} / hold {} / sell {} / strong sell {}",
                rec.period,
                or_absent(rec.strong_buy),
                or_absent(rec.buy),
                or_absent(rec.hold),
                or_absent(rec.sell),
                or_absent(rec.strong_sell)
            );
        }

        heading("Earnings Data");
        if let Some(e) = &r.earnings {
            for y in &e.yearly {
                println!(
                    "{}  revenue {}  earnings {}",
                    y.year,
                    or_absent(y.revenue),
                    or_absent(y.earnings)
                );
            }
            for q in &e.quarterly {
                println!(
                    "{}  revenue {}  earnings {}",
                    q.period,
                    or_absent(q.revenue),
                    or_absent(q.earnings)
                );
            }
        }

        for w in &r.warnings {
            eprintln!("warning: {w}");
        }
    }

    fn show_table(&mut self, title: &str, table: &SummaryTable) {
        let rows: Vec<[String; 10]> = table.iter().map(|r| r.cells()).collect();
        let mut widths = COLUMNS.map(str::len);
        for cells in &rows {
            for (w, c) in widths.iter_mut().zip(cells) {
                *w = (*w).max(c.chars().count());
            }
        }
        heading(title);
        let line = |cells: &[&str]| {
            cells
                .iter()
                .zip(widths)
                .map(|(c, w)| format!("{c:<w$}"))
                .collect::<Vec<_>>()
                .join("  ")
        };
        println!("{}", line(&COLUMNS));
        for cells in &rows {
            let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
            println!("{}", line(&refs));
        }
    }

    fn unknown_ticker(&mut self, _input: &str) {
        println!("Invalid ticker or data unavailable.");
    }

    fn export_status(&mut self, status: &ExportStatus) {
        match status {
            ExportStatus::Written { path, rows } => {
                println!("CSV file '{}' has been generated! ({rows} rows)", path.display());
            }
            ExportStatus::Failed { path, error } => {
                eprintln!("Could not write '{}': {error}", path.display());
            }
        }
    }
}
