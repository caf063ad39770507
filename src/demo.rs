// Demo mode: a static banking dashboard that exercises every renderer
//
// Sections, top to bottom:
// - gradient title box
// - three panels side by side
// - top balances with progress bars
// - a column statement table
// - status messages
// - the most recent captured log lines, in a panel
//
// The data is fixed; only the timestamps follow the clock.

use anyhow::{Context, Result};
use bankterm::config::Config;
use bankterm::logging::LogBuffer;
use bankterm::render::columns_interior_width;
use bankterm::style::Sgr;
use bankterm::text::{ellipsize, pad_end};
use bankterm::{
    gradient_title, message, render_box, render_columns, render_panel, render_progress_bar,
    rule, side_by_side, Align, BarStyle, Border, BoxStyle, Column, MessageKind, PanelStyle,
    Palette,
};
use chrono::{DateTime, Duration, Local};
use std::io::Write;

const APP_NAME: &str = "PyBank";

/// Rows of the log panel
const LOG_ROWS: usize = 5;

struct Account {
    number: u32,
    holder: &'static str,
    balance: f64,
    active: bool,
}

const ACCOUNTS: &[Account] = &[
    Account { number: 1, holder: "Ana Souza", balance: 12_450.00, active: true },
    Account { number: 2, holder: "João Pereira", balance: 3_210.55, active: true },
    Account { number: 3, holder: "Márcia Gonçalves", balance: 8_975.10, active: true },
    Account { number: 4, holder: "李 小龍", balance: 640.00, active: false },
    Account { number: 5, holder: "Zoë Ñúñez", balance: 27_300.90, active: true },
    Account { number: 6, holder: "Pedro Álvares", balance: 150.00, active: true },
];

#[derive(Clone, Copy)]
enum Kind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Deposit => "Deposito",
            Kind::Withdrawal => "Saque",
            Kind::Transfer => "Transferência",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Kind::Deposit => "💰",
            Kind::Withdrawal => "💸",
            Kind::Transfer => "🔄",
        }
    }

    fn style(self, palette: &Palette) -> &str {
        match self {
            Kind::Deposit => palette.success.as_str(),
            Kind::Withdrawal => palette.error.as_str(),
            Kind::Transfer => palette.info.as_str(),
        }
    }
}

/// (minutes ago, kind, account, amount)
const LEDGER: &[(i64, Kind, u32, f64)] = &[
    (3, Kind::Deposit, 1, 150.00),
    (17, Kind::Withdrawal, 2, -80.00),
    (42, Kind::Transfer, 5, -1_200.00),
    (95, Kind::Deposit, 3, 2_500.00),
    (240, Kind::Withdrawal, 6, -50.00),
    (1_500, Kind::Deposit, 4, 640.00),
];

/// Print the dashboard to stdout
pub fn run(config: &Config, logs: &LogBuffer, clear: bool) -> Result<()> {
    let mut stdout = std::io::stdout();

    if clear {
        crossterm::execute!(
            stdout,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0)
        )
        .context("Failed to clear the terminal")?;
    }

    match crossterm::terminal::size() {
        Ok((columns, _)) if (columns as usize) < config.ui_width => {
            tracing::warn!(
                "Terminal is {} columns wide, dashboard needs {}",
                columns,
                config.ui_width
            );
        }
        Ok(_) => {}
        Err(e) => tracing::debug!("Terminal size unavailable: {}", e),
    }

    let lines = render(config, Palette::global(), logs, Local::now());
    for line in &lines {
        writeln!(stdout, "{}", line).context("Failed to write dashboard")?;
    }
    stdout.flush().context("Failed to write dashboard")?;
    Ok(())
}

/// Build every dashboard line
pub fn render(
    config: &Config,
    palette: &Palette,
    logs: &LogBuffer,
    now: DateTime<Local>,
) -> Vec<String> {
    let mut lines = Vec::new();

    tracing::info!("Rendering dashboard for {} accounts", ACCOUNTS.len());

    lines.extend(header(config, palette, now));
    lines.push(String::new());
    lines.extend(summary_panels(config, palette));
    lines.push(String::new());
    lines.extend(top_balances(config, palette));
    lines.push(String::new());
    lines.extend(statement(config, palette, now));
    lines.push(String::new());
    lines.extend(status_messages(palette));
    lines.push(String::new());

    tracing::debug!("Dashboard body is {} lines", lines.len());
    lines.extend(log_panel(config, palette, logs));
    lines
}

fn header(config: &Config, palette: &Palette, now: DateTime<Local>) -> Vec<String> {
    let title = gradient_title(&format!("{} dashboard", APP_NAME), palette);
    let style = BoxStyle::new(palette)
        .width(config.ui_width)
        .icon("📊")
        .title_style("");
    let subtitle = format!(
        "{}{}  ·  tema {}{}",
        palette.subtitle,
        now.format("%d/%m/%Y %H:%M"),
        palette.name,
        Sgr::RESET
    );
    render_box(&title, &[subtitle], &style).into_lines()
}

fn summary_panels(config: &Config, palette: &Palette) -> Vec<String> {
    let total: f64 = ACCOUNTS.iter().map(|a| a.balance).sum();
    let average = total / ACCOUNTS.len().max(1) as f64;
    let active = ACCOUNTS.iter().filter(|a| a.active).count();
    let bold = |n: usize| format!("{}{:>3}{}", Sgr::BOLD, n, Sgr::RESET);

    let panel = |title: &str, icon: &str, border: &str, items: &[String]| {
        let style = PanelStyle::new(palette)
            .interior(config.panel_width)
            .icon(icon)
            .border_style(border);
        render_panel(title, items, &style)
    };

    let clients = panel(
        "CLIENTES",
        "👥",
        palette.info.as_str(),
        &[
            format!("{} cadastrados", bold(ACCOUNTS.len())),
            format!("{} contas", bold(ACCOUNTS.len())),
        ],
    );
    let wealth = panel(
        "PATRIMÔNIO",
        "💰",
        palette.success.as_str(),
        &[
            format!("Total: {}", brl(total, palette)),
            format!("Média: {}", brl(average, palette)),
        ],
    );
    let movements = panel(
        "MOVIMENTAÇÕES",
        "📈",
        palette.secondary.as_str(),
        &[
            format!("{} transações", bold(LEDGER.len())),
            format!("{} contas ativas", bold(active)),
        ],
    );

    side_by_side(&[clients, wealth, movements], 2)
}

fn top_balances(config: &Config, palette: &Palette) -> Vec<String> {
    let mut accounts: Vec<&Account> = ACCOUNTS.iter().collect();
    accounts.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    accounts.truncate(5);

    let max = accounts.first().map(|a| a.balance).unwrap_or(1.0);
    let bar = BarStyle::new(palette);
    let divider = format!("  {}", rule(&palette.muted, '─', config.ui_width.saturating_sub(4)));

    let mut lines = vec![
        format!("{}  📊 TOP 5 CONTAS POR SALDO:{}", palette.primary, Sgr::RESET),
        divider.clone(),
    ];
    for account in accounts {
        lines.push(format!(
            "  {}#{:>2}{} {} {} {}",
            palette.primary,
            account.number,
            Sgr::RESET,
            pad_end(&ellipsize(account.holder, 15), 15),
            render_progress_bar(account.balance, max, config.bar_width, &bar),
            brl(account.balance, palette)
        ));
    }
    lines.push(divider);
    lines
}

/// Cell widths of the statement table; the last column takes what is left
fn statement_widths(ui_width: usize) -> [usize; 4] {
    let fixed = [11, 16, 16];
    let used = columns_interior_width(&[fixed[0], fixed[1], fixed[2], 0]) + 2;
    [fixed[0], fixed[1], fixed[2], ui_width.saturating_sub(used).max(4)]
}

fn statement(config: &Config, palette: &Palette, now: DateTime<Local>) -> Vec<String> {
    let widths = statement_widths(config.ui_width);
    let interior = columns_interior_width(&widths);
    let frame = palette.primary.as_str();
    let border = Border::LIGHT;

    let header = [
        format!("{}Data{}", Sgr::BOLD, Sgr::RESET),
        format!("{}Tipo{}", Sgr::BOLD, Sgr::RESET),
        format!("{}Titular{}", Sgr::BOLD, Sgr::RESET),
        format!("{}Valor{}", Sgr::BOLD, Sgr::RESET),
    ];

    let mut lines = vec![
        format!("{}  🕐 ÚLTIMAS TRANSAÇÕES:{}", palette.primary, Sgr::RESET),
        border.top(frame, interior),
        render_columns(
            &[
                Column::new(&header[0], widths[0]),
                Column::new(&header[1], widths[1]),
                Column::new(&header[2], widths[2]),
                Column::new(&header[3], widths[3]).align(Align::End),
            ],
            frame,
        ),
        border.divider(frame, interior),
    ];

    for &(minutes_ago, kind, number, amount) in LEDGER {
        let when = now - Duration::minutes(minutes_ago);
        let date = format!("{}{}{}", palette.muted, when.format("%d/%m %H:%M"), Sgr::RESET);
        let label = format!("{} {}{}{}", kind.icon(), kind.style(palette), kind.label(), Sgr::RESET);
        let holder = ACCOUNTS
            .iter()
            .find(|a| a.number == number)
            .map(|a| a.holder)
            .unwrap_or("Cliente");
        let value = brl(amount, palette);

        lines.push(render_columns(
            &[
                Column::new(&date, widths[0]),
                Column::new(&label, widths[1]),
                Column::new(holder, widths[2]),
                Column::new(&value, widths[3]).align(Align::End),
            ],
            frame,
        ));
    }

    lines.push(border.bottom(frame, interior));
    lines
}

fn status_messages(palette: &Palette) -> Vec<String> {
    vec![
        message(MessageKind::Success, "Depósito de R$ 150,00 realizado!", palette),
        message(MessageKind::Warning, "Conta #4 está inativa", palette),
        message(MessageKind::Error, "Saque negado: limite diário atingido", palette),
        message(MessageKind::Info, "Extrato atualizado", palette),
        message(MessageKind::Highlight, "Digite 'dash' para voltar aqui", palette),
    ]
}

fn log_panel(config: &Config, palette: &Palette, logs: &LogBuffer) -> Vec<String> {
    let interior = config.ui_width.saturating_sub(2);
    let budget = interior.saturating_sub(1);

    let mut items: Vec<String> = logs
        .recent(LOG_ROWS)
        .iter()
        .map(|entry| ellipsize(&entry.summary(), budget))
        .collect();
    if items.is_empty() {
        items.push(format!("{}Nenhum log capturado{}", palette.muted, Sgr::RESET));
    }

    let style = PanelStyle::new(palette)
        .interior(interior)
        .icon("📜")
        .border_style(palette.muted.as_str());
    render_panel("LOGS", &items, &style).into_lines()
}

/// Brazilian currency, green for credits and red for debits
fn brl(value: f64, palette: &Palette) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let style = if value >= 0.0 {
        &palette.success
    } else {
        &palette.error
    };
    format!("{}R$ {},{:02}{}", style, grouped, cents % 100, Sgr::RESET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankterm::logging::{LogEntry, LogLevel};
    use bankterm::measure;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 5, 14, 2, 11).unwrap()
    }

    #[test]
    fn test_brl_formatting() {
        let palette = Palette::mono();
        assert_eq!(brl(1234.5, &palette), format!("{}R$ 1.234,50{}", palette.success, Sgr::RESET));
        assert_eq!(brl(-0.07, &palette), format!("{}R$ 0,07{}", palette.error, Sgr::RESET));
        assert_eq!(brl(27_300.90, &palette), format!("{}R$ 27.300,90{}", palette.success, Sgr::RESET));
    }

    #[test]
    fn test_header_and_statement_match_ui_width() {
        let config = Config::default();
        let palette = Palette::classic();

        for line in header(&config, &palette, fixed_now()) {
            assert_eq!(measure(&line), config.ui_width, "{:?}", line);
        }
        // Heading line excluded
        for line in statement(&config, &palette, fixed_now()).iter().skip(1) {
            assert_eq!(measure(line), config.ui_width, "{:?}", line);
        }
    }

    #[test]
    fn test_panels_row_has_uniform_width() {
        let config = Config::default();
        let lines = summary_panels(&config, &Palette::classic());
        let expected = 2 + 3 * (config.panel_width + 2) + 2 * 2;
        assert_eq!(lines.len(), 6);
        for line in &lines {
            assert_eq!(measure(line), expected);
        }
    }

    #[test]
    fn test_log_panel_shows_recent_entries() {
        let config = Config::default();
        let logs = LogBuffer::new();
        logs.add(LogEntry {
            timestamp: fixed_now(),
            level: LogLevel::Warn,
            target: "bankterm".to_string(),
            message: "limite quase atingido".to_string(),
        });

        let lines = log_panel(&config, &Palette::classic(), &logs);
        assert!(lines.iter().any(|l| l.contains("14:02:11 WARN  limite quase atingido")));
        for line in &lines {
            assert_eq!(measure(line), config.ui_width);
        }
    }

    #[test]
    fn test_log_panel_placeholder_when_empty() {
        let lines = log_panel(&Config::default(), &Palette::classic(), &LogBuffer::new());
        assert!(lines.iter().any(|l| l.contains("Nenhum log capturado")));
    }

    #[test]
    fn test_render_narrow_config_does_not_panic() {
        let mut config = Config::default();
        config.ui_width = 10;
        config.panel_width = 8;
        config.bar_width = 1;
        let lines = render(&config, &Palette::mono(), &LogBuffer::new(), fixed_now());
        assert!(!lines.is_empty());
    }
}
