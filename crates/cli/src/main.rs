use advisor::{EnrollmentType, RecommendationRequest};
use anyhow::{anyhow, Context, Result};
use catalog::{Course, CourseStats, DeliveryMode, Weekday};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use planner::AddOutcome;
use search::{CreditRange, Criteria, Level, TimeOfDay};
use service::{CompassConfig, CompassService};
use std::path::PathBuf;
use std::time::Instant;

/// Course Compass - search, plan and get advice on university courses
#[derive(Parser)]
#[command(name = "course-compass")]
#[command(about = "Search the course catalog, build a schedule and get recommendations", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON file to use instead of the configured source
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Backend API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding cart.json and enrolled.json
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search(SearchArgs),

    /// Show everything known about one course
    Show {
        /// Course id or code (e.g. c1 or CSCI-B551)
        course: String,
    },

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Enroll in every course in the cart
    Enroll,

    /// List enrolled courses
    Enrolled {
        /// Only show one term, e.g. "Fall 2024"
        #[arg(long, default_value = "all")]
        term: String,
    },

    /// Drop an enrolled course
    Unenroll {
        /// Course id or code
        course: String,
    },

    /// Check credits, time clashes and prerequisites of enrolled courses
    Validate {
        /// Term to validate, e.g. "Spring 2024"
        #[arg(long, default_value = "all")]
        term: String,
    },

    /// Recommend courses for a career goal
    Recommend(RecommendArgs),

    /// Ask the assistant a question
    Chat {
        /// The question
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Ask the backend API instead of the local assistant
        #[arg(long)]
        remote: bool,
    },

    /// Download a roadmap image for a career goal
    Roadmap {
        /// Career path title
        #[arg(long)]
        goal: String,

        /// Where to write the PNG
        #[arg(long, default_value = "roadmap.png")]
        out: PathBuf,
    },

    /// List departments, terms and professors in the catalog
    Departments,
}

#[derive(Args)]
struct SearchArgs {
    /// Words to look for in name, description, code or professor (any word matches)
    #[arg(short, long)]
    keyword: Option<String>,

    /// Term, e.g. Fall
    #[arg(long)]
    term: Option<String>,

    /// Department code, e.g. CSCI
    #[arg(long)]
    department: Option<String>,

    /// Part of the professor's name
    #[arg(long)]
    professor: Option<String>,

    /// Part of the course number, e.g. B55
    #[arg(long)]
    number: Option<String>,

    /// graduate, undergraduate, or a hundred level such as 300
    #[arg(long)]
    level: Option<Level>,

    /// Online, In-Person or Hybrid
    #[arg(long)]
    mode: Option<DeliveryMode>,

    /// Credit range, e.g. 3-4
    #[arg(long)]
    credits: Option<CreditRange>,

    /// Meeting days (repeat or comma-separate)
    #[arg(long = "day", value_delimiter = ',')]
    days: Vec<Weekday>,

    /// morning, afternoon or evening (repeat or comma-separate)
    #[arg(long = "time", value_delimiter = ',')]
    times: Vec<TimeOfDay>,

    /// Show pass rate and seats for each result
    #[arg(long)]
    stats: bool,
}

impl SearchArgs {
    fn criteria(&self) -> Criteria {
        let mut criteria = Criteria::new()
            .with_days(self.days.iter().copied())
            .with_times(self.times.iter().copied());
        if let Some(keyword) = &self.keyword {
            criteria = criteria.with_keyword(keyword);
        }
        if let Some(term) = &self.term {
            criteria = criteria.with_term(term);
        }
        if let Some(department) = &self.department {
            criteria = criteria.with_department(department);
        }
        if let Some(professor) = &self.professor {
            criteria = criteria.with_professor(professor);
        }
        if let Some(number) = &self.number {
            criteria = criteria.with_course_number(number);
        }
        if let Some(level) = self.level {
            criteria = criteria.with_level(level);
        }
        if let Some(mode) = self.mode {
            criteria = criteria.with_mode(mode);
        }
        if let Some(credits) = self.credits {
            criteria = criteria.with_credits(credits);
        }
        criteria
    }
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a course by id or code
    Add { course: String },
    /// Remove a course by id or code
    Remove { course: String },
    /// Show the cart
    List,
    /// Empty the cart
    Clear,
}

#[derive(Args)]
struct RecommendArgs {
    /// Career path title, e.g. "Data Scientist"
    #[arg(long)]
    goal: String,

    /// Comma-separated subjects or skills
    #[arg(long, default_value = "")]
    subjects: String,

    /// Days you can attend (repeat or comma-separate)
    #[arg(long = "day", value_delimiter = ',')]
    days: Vec<Weekday>,

    /// fulltime or parttime
    #[arg(long, default_value = "fulltime")]
    enrollment_type: EnrollmentType,

    /// Ask the backend API instead of the local rules
    #[arg(long)]
    remote: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    let start = Instant::now();
    let mut service = CompassService::open(config)
        .await
        .context("Failed to start Course Compass")?;
    tracing::debug!("Service ready in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search(args) => handle_search(&service, &args),
        Commands::Show { course } => handle_show(&service, &course)?,
        Commands::Cart { action } => handle_cart(&mut service, action)?,
        Commands::Enroll => handle_enroll(&mut service)?,
        Commands::Enrolled { term } => handle_enrolled(&service, &term),
        Commands::Unenroll { course } => handle_unenroll(&mut service, &course)?,
        Commands::Validate { term } => handle_validate(&service, &term)?,
        Commands::Recommend(args) => handle_recommend(&service, args).await?,
        Commands::Chat { message, remote } => handle_chat(&service, &message.join(" "), remote).await,
        Commands::Roadmap { goal, out } => {
            let written = service.roadmap(&goal, &out).await?;
            println!("{} Wrote {} bytes to {}", "✓".green(), written, out.display());
        }
        Commands::Departments => handle_departments(&service),
    }

    Ok(())
}

/// Config file (if any) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<CompassConfig> {
    let mut config = match &cli.config {
        Some(path) => CompassConfig::from_file(path)?,
        None => CompassConfig::default(),
    };
    if let Some(data) = &cli.data {
        config = config.with_catalog_file(data);
    }
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url);
    }
    if let Some(dir) = &cli.store_dir {
        config = config.with_storage_dir(dir);
    }
    config.validate()?;
    Ok(config)
}

/// Handle the 'search' command
fn handle_search(service: &CompassService, args: &SearchArgs) {
    let results = service.search(&args.criteria());

    println!(
        "{}",
        format!("{} of {} courses match:", results.len(), service.catalog().len())
            .bold()
            .blue()
    );
    for course in results {
        print_course_line(course);
        if args.stats {
            if let Some(stats) = service.catalog().get_course_stats(&course.id) {
                println!("      {}", format_stats(stats).dimmed());
            }
        }
    }
}

/// Handle the 'show' command
fn handle_show(service: &CompassService, id_or_code: &str) -> Result<()> {
    let course = service.course(id_or_code)?;

    println!("{}", format!("{}: {}", course.code, course.name).bold().blue());
    println!("{}Department: {} ({})", "• ".green(), course.department, course.department_code);
    println!("{}Credits: {}", "• ".green(), course.credits);
    println!("{}Term: {}", "• ".green(), course.term_label());
    println!("{}Mode: {}", "• ".green(), course.mode);
    println!("{}Schedule: {}", "• ".green(), format_schedule(course));
    if !course.location.is_empty() {
        println!("{}Location: {}", "• ".green(), course.location);
    }
    if let Some(professor) = &course.professor {
        println!(
            "{}Professor: {} ({:.1}/5) {}",
            "• ".green(),
            professor.name,
            professor.avg_rating,
            professor.email.dimmed()
        );
    }
    if let Some(availability) = course.availability {
        println!(
            "{}Seats: {} of {} open",
            "• ".green(),
            availability.seats_remaining(),
            availability.total
        );
    }
    if !course.prerequisites.is_empty() {
        println!("{}Prerequisites: {}", "• ".green(), course.prerequisites.join(", "));
    }
    if !course.textbooks.is_empty() {
        println!("{}Textbooks: {}", "• ".green(), course.textbooks.join("; "));
    }

    if !course.description.is_empty() {
        println!("\n{}", course.description);
    }

    if let Some(ocq) = &course.ocq {
        println!("\n{}", "OCQ ratings:".bold());
        println!(
            "  overall {:.1}  difficulty {:.1}  workload {:.1}  organization {:.1}",
            ocq.overall, ocq.difficulty, ocq.workload, ocq.organization
        );
        for comment in &ocq.comments {
            println!("  {} [{}] {}", comment.date.dimmed(), comment.rating, comment.text);
        }
    }

    if let Some(grades) = course.grade_distribution {
        println!("\n{}", "Grade distribution:".bold());
        for (label, share) in grades.entries() {
            let bar = "█".repeat((share / 2.0).round().max(0.0) as usize);
            println!("  {:<8} {:>5.1}% {}", label, share, bar.cyan());
        }
        println!("  pass rate {:.0}%", grades.pass_rate() * 100.0);
    }
    Ok(())
}

/// Handle the 'cart' subcommands
fn handle_cart(service: &mut CompassService, action: CartAction) -> Result<()> {
    match action {
        CartAction::Add { course } => {
            let (course, outcome) = service.add_to_cart(&course)?;
            match outcome {
                AddOutcome::Added => println!("{} Added {} to your cart", "✓".green(), course.code),
                AddOutcome::AlreadyPresent => {
                    println!("{} {} is already in your cart", "!".yellow(), course.code)
                }
            }
        }
        CartAction::Remove { course } => match service.remove_from_cart(&course)? {
            Some(removed) => println!("{} Removed {} from your cart", "✓".green(), removed.code),
            None => println!("{} {} is not in your cart", "!".yellow(), course),
        },
        CartAction::List => {
            let cart = service.cart();
            if cart.is_empty() {
                println!("Your cart is empty.");
                return Ok(());
            }
            println!(
                "{}",
                format!(
                    "You have {} courses ({} credits) in your cart.",
                    cart.len(),
                    cart.total_credits()
                )
                .bold()
                .blue()
            );
            for course in cart.items() {
                print_course_line(course);
            }
        }
        CartAction::Clear => {
            service.clear_cart()?;
            println!("{} Cart cleared", "✓".green());
        }
    }
    Ok(())
}

/// Handle the 'enroll' command
fn handle_enroll(service: &mut CompassService) -> Result<()> {
    let outcome = service.enroll()?;
    println!("{} Enrolled in {} courses", "✓".green(), outcome.added);
    if outcome.already_enrolled > 0 {
        println!(
            "{} {} courses were already enrolled",
            "!".yellow(),
            outcome.already_enrolled
        );
    }
    Ok(())
}

/// Handle the 'enrolled' command
fn handle_enrolled(service: &CompassService, term: &str) {
    let enrollment = service.enrollment();
    if enrollment.is_empty() {
        println!("You are not enrolled in any courses yet.");
        return;
    }

    // Group by term label, in first-seen order
    for label in enrollment.terms() {
        if !(term.eq_ignore_ascii_case("all") || term.eq_ignore_ascii_case(&label)) {
            continue;
        }
        let courses = enrollment.by_term(&label);
        let credits: u32 = courses.iter().map(|c| u32::from(c.credits)).sum();
        println!("{}", format!("{label} ({credits} credits)").bold().blue());
        for course in courses {
            print_course_line(course);
        }
    }
}

/// Handle the 'unenroll' command
fn handle_unenroll(service: &mut CompassService, course: &str) -> Result<()> {
    match service.unenroll(course)? {
        Some(removed) => println!(
            "{} {} has been removed from your enrolled courses",
            "✓".green(),
            removed.code
        ),
        None => println!("{} {} is not enrolled", "!".yellow(), course),
    }
    Ok(())
}

/// Handle the 'validate' command
fn handle_validate(service: &CompassService, term: &str) -> Result<()> {
    let min_credits = service.config().planner.min_credits;
    match service.validate_term(term) {
        Ok(()) => {
            println!("{} Minimum {} credits", "✓".green(), min_credits);
            println!("{} No time clash", "✓".green());
            println!("{} Prerequisites met", "✓".green());
            println!("{}", "Your schedule is valid!".bold().green());
            Ok(())
        }
        Err(issue) => {
            println!("{} {}", "✗".red(), issue.check());
            Err(anyhow!(issue))
        }
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(service: &CompassService, args: RecommendArgs) -> Result<()> {
    let request = RecommendationRequest::new(args.goal)
        .with_subjects(args.subjects)
        .with_days(args.days)
        .with_enrollment_type(args.enrollment_type);

    println!(
        "{}",
        format!("Recommendations for {}:", request.career_goal).bold().blue()
    );

    if args.remote {
        let courses = service.recommend_remote(&request).await?;
        for (rank, course) in courses.iter().enumerate() {
            print!("{}. ", (rank + 1).to_string().green());
            print_course_line(course);
        }
        return Ok(());
    }

    if service.advisor().find_path(&request.career_goal).is_none() {
        let titles: Vec<&str> = service.advisor().paths().iter().map(|p| p.title.as_str()).collect();
        println!("Unknown career goal. Try one of: {}", titles.join(", "));
        return Ok(());
    }

    let recommendations = service.recommend(&request);
    if recommendations.is_empty() {
        println!("No courses on this path fit your schedule.");
    }
    for (rank, rec) in recommendations.iter().enumerate() {
        print!("{}. ", (rank + 1).to_string().green());
        print_course_line(&rec.course);
        if !rec.matched_subjects.is_empty() {
            println!("      matches: {}", rec.matched_subjects.join(", ").cyan());
        }
    }
    Ok(())
}

/// Handle the 'chat' command
async fn handle_chat(service: &CompassService, message: &str, remote: bool) {
    let mut session = service.chat_session();
    if !service.converse(&mut session, message, remote).await {
        return;
    }
    for entry in session.messages() {
        let speaker = if entry.from_user {
            "You:".bold()
        } else {
            "Compass:".bold().magenta()
        };
        let time = entry.timestamp.format("%H:%M").to_string();
        println!("{} {} {}", time.dimmed(), speaker, entry.text);
    }
}

/// Handle the 'departments' command
fn handle_departments(service: &CompassService) {
    println!("{}", "Departments:".bold().blue());
    for department in service.catalog().departments() {
        println!("  {:<6} {}", department.code.green(), department.name);
    }
    println!("{}", "Terms:".bold().blue());
    for term in service.catalog().terms() {
        println!("  {}", term);
    }
    println!("{}", "Professors:".bold().blue());
    for professor in service.catalog().professors() {
        println!(
            "  {:<24} {:.1}/5  {}",
            professor.name,
            professor.avg_rating,
            professor.department.dimmed()
        );
    }
}

/// One-line summary used by every listing
fn print_course_line(course: &Course) {
    println!(
        "{:<10} {:<40} {} cr  {:<11} {:<20} {}",
        course.code.green(),
        course.name,
        course.credits,
        course.term_label(),
        format_schedule(course),
        course.professor_name().unwrap_or("TBA").dimmed()
    );
}

fn format_schedule(course: &Course) -> String {
    match &course.schedule {
        Some(schedule) => {
            let days: String = schedule.days.iter().map(|d| day_letter(*d)).collect();
            format!("{} {}-{}", days, schedule.start_time, schedule.end_time)
        }
        None => "TBA".to_string(),
    }
}

fn day_letter(day: Weekday) -> char {
    match day {
        Weekday::Monday => 'M',
        Weekday::Tuesday => 'T',
        Weekday::Wednesday => 'W',
        Weekday::Thursday => 'R',
        Weekday::Friday => 'F',
    }
}

fn format_stats(stats: &CourseStats) -> String {
    let mut parts = Vec::new();
    if let Some(rate) = stats.pass_rate {
        parts.push(format!("pass rate {:.0}%", rate * 100.0));
    }
    if let Some(seats) = stats.seats_remaining {
        parts.push(format!("{seats} seats left"));
    }
    if let Some(fill) = stats.fill_ratio {
        parts.push(format!("{:.0}% full", fill * 100.0));
    }
    if let Some(ocq) = stats.ocq_overall {
        parts.push(format!("OCQ {ocq:.1}"));
    }
    if parts.is_empty() {
        "no stats".to_string()
    } else {
        parts.join(" · ")
    }
}
