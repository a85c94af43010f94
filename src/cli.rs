use clap::{Parser, Subcommand};

use crate::models::{Language, Message};
use crate::pages::auth::{LoginPage, LoginStep};
use crate::pages::catalog::{self, Paging};
use crate::pages::{Outcome, PageContext, ToastLevel};
use crate::routes::Route;

#[derive(Parser, Debug)]
#[command(author, version, about = "Education laboratory site client")]
pub struct Cli {
    /// Interface language (uz, ru, en); defaults to APP_LANGUAGE
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List study directions
    Directions,
    /// List courses, optionally of one direction
    Courses {
        #[arg(long)]
        direction: Option<i64>,
    },
    /// List news
    News {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// List opportunities
    Opportunities {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show the signed-in user's profile
    Profile,
    /// Text a verification code to a phone number
    Login { phone: String },
    /// Exchange a verification code for a session
    Verify { phone: String, code: String },
    /// Forget the stored session
    Logout,
    /// Resolve a site path to its screen
    Route { path: String },
}

fn report(outcome: &Outcome) {
    if let Some(toast) = &outcome.toast {
        match toast.level {
            ToastLevel::Error => eprintln!("error: {}", toast.message),
            _ => println!("{}", toast.message),
        }
    }
    if let Some(route) = outcome.redirect {
        println!("-> {route}");
    }
}

pub async fn execute(ctx: &PageContext, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let lang = ctx.lang;
    match command {
        Command::Directions => {
            for d in catalog::load_directions(ctx).await.visible(lang) {
                println!("{:>4}  {}", d.id, d.title(lang));
            }
        }
        Command::Courses { direction } => {
            for c in catalog::load_courses(ctx, direction).await.visible(lang) {
                let hours = c.hours.map(|h| format!(" ({h}h)")).unwrap_or_default();
                println!("{:>4}  {}{}", c.id, c.title(lang), hours);
            }
        }
        Command::News { page, limit } => {
            for n in catalog::load_news(ctx, Paging { page, limit }).await.visible(lang) {
                let date = n.publish_date.map(|d| d.to_string()).unwrap_or_default();
                println!("{:>4}  {:<10}  {}", n.id, date, n.title(lang));
            }
        }
        Command::Opportunities { page, limit } => {
            for o in catalog::load_opportunities(ctx, Paging { page, limit })
                .await
                .visible(lang)
            {
                println!("{:>4}  {}", o.id, o.title(lang));
            }
        }
        Command::Profile => match ctx.data.get_user_profile().await {
            Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
            None => eprintln!("error: {}", Message::SessionExpired.text(lang)),
        },
        Command::Login { phone } => {
            let mut page = LoginPage {
                phone,
                ..Default::default()
            };
            report(&page.request_code(ctx).await);
        }
        Command::Verify { phone, code } => {
            let mut page = LoginPage {
                phone,
                code,
                step: LoginStep::Code,
            };
            report(&page.verify_code(ctx).await);
        }
        Command::Logout => {
            ctx.client.logout();
        }
        Command::Route { path } => {
            let route = Route::resolve(&path);
            println!(
                "{route:?} (admin: {}, requires auth: {})",
                route.is_admin(),
                route.requires_auth()
            );
        }
    }
    Ok(())
}
