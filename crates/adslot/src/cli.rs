//! Clap derive structures for the `adslot` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// adslot -- manage advertising campaigns from the command line
#[derive(Debug, Parser)]
#[command(
    name = "adslot",
    version,
    about = "Create ads, book placement slots, and track campaigns",
    long_about = "A command-line client for the Adslot advertising platform.\n\n\
        Create ad creatives, upload media, check placement availability,\n\
        book calendar slots, and follow click statistics.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "ADSLOT_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 's', env = "ADSLOT_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ADSLOT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ADSLOT_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "ADSLOT_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and cache the session tokens
    Login(LoginArgs),

    /// Sign out and clear cached tokens
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Register a new advertiser account
    Register(RegisterArgs),

    /// Change the account password
    ChangePassword,

    /// Manage ad creatives
    #[command(alias = "ad")]
    Ads(AdsArgs),

    /// Book and manage placement slots
    #[command(alias = "book", alias = "b")]
    Bookings(BookingsArgs),

    /// Browse placements and check availability
    #[command(alias = "pl")]
    Placements(PlacementsArgs),

    /// Manage uploaded media files
    Files(FilesArgs),

    /// View and record payments
    Payments(PaymentsArgs),

    /// View notifications
    #[command(alias = "notif")]
    Notifications(NotificationsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(long, short = 'u')]
    pub username: Option<String>,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Username
    #[arg(long, required = true)]
    pub username: String,

    /// Email address
    #[arg(long, required = true)]
    pub email: String,

    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AdsArgs {
    #[command(subcommand)]
    pub command: AdsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdsCommand {
    /// List your ads
    #[command(alias = "ls")]
    List {
        /// Filter by lifecycle status
        #[arg(long, value_enum)]
        status: Option<AdStatusFilter>,
    },

    /// Get ad details
    Get {
        /// Ad id
        id: i64,
    },

    /// Create an ad (optionally submitting it for review)
    Create(CreateAdArgs),

    /// Submit an existing draft for review
    Submit {
        /// Ad id
        id: i64,
    },

    /// Update fields of an existing ad
    Update {
        /// Ad id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New short description
        #[arg(long)]
        short_description: Option<String>,

        /// New full description
        #[arg(long)]
        full_description: Option<String>,

        /// New call-to-action text
        #[arg(long)]
        call_to_action: Option<String>,

        /// New website URL
        #[arg(long)]
        website_url: Option<String>,

        /// New catalog URL
        #[arg(long)]
        catalog_url: Option<String>,

        /// New region/city
        #[arg(long)]
        region: Option<String>,
    },

    /// Delete an ad
    Delete {
        /// Ad id
        id: i64,
    },

    /// Click/impression statistics (one ad, or your aggregate)
    Stats {
        /// Ad id (aggregate across your ads when omitted)
        id: Option<i64>,
    },
}

#[derive(Debug, Args)]
pub struct CreateAdArgs {
    /// Ad category
    #[arg(long, value_enum, required = true)]
    pub category: AdCategoryArg,

    /// Ad title
    #[arg(long, required = true)]
    pub title: String,

    /// Short description (listings)
    #[arg(long)]
    pub short_description: Option<String>,

    /// Full description (detail view; full-format only)
    #[arg(long)]
    pub full_description: Option<String>,

    /// Call-to-action button text
    #[arg(long)]
    pub call_to_action: Option<String>,

    /// Website URL
    #[arg(long)]
    pub website_url: Option<String>,

    /// Catalog/brochure URL (full-format only)
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Terms & conditions text (full-format only)
    #[arg(long)]
    pub terms: Option<String>,

    /// Placement targeting (media-led only)
    #[arg(long, value_enum)]
    pub placement_kind: Option<PlacementKindArg>,

    /// Region or city (media-led only)
    #[arg(long)]
    pub region: Option<String>,

    /// Image/logo file to upload and attach (repeatable)
    #[arg(long = "file", short = 'F', value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Submit for review instead of saving as draft
    #[arg(long)]
    pub submit: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AdCategoryArg {
    /// Image-first ad: needs media, a website link, and targeting
    MediaLed,
    /// Self-contained text ad: only a title is mandatory
    FullFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlacementKindArg {
    Main,
    Regional,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AdStatusFilter {
    Draft,
    PendingReview,
    Approved,
    Rejected,
    Live,
    Expired,
    Paused,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BOOKINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BookingsArgs {
    #[command(subcommand)]
    pub command: BookingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List your bookings
    #[command(alias = "ls")]
    List {
        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<BookingStatusFilter>,
    },

    /// Get booking details
    Get {
        /// Booking id
        id: i64,
    },

    /// Book a placement slot (quote + availability check + confirm)
    Create {
        /// Ad id (must be approved or live)
        #[arg(long, required = true)]
        ad: i64,

        /// Placement id
        #[arg(long, required = true)]
        placement: i64,

        /// First day of the booking (YYYY-MM-DD)
        #[arg(long, required = true)]
        start: chrono::NaiveDate,

        /// Last day of the booking, inclusive (YYYY-MM-DD)
        #[arg(long, required = true)]
        end: chrono::NaiveDate,
    },

    /// Cancel a booking (terminal, requires a reason)
    Cancel {
        /// Booking id
        id: i64,

        /// Cancellation reason
        #[arg(long, required = true)]
        reason: String,
    },

    /// Render the availability calendar for a month
    #[command(alias = "cal")]
    Calendar {
        /// Month to display (YYYY-MM, current month when omitted)
        #[arg(long)]
        month: Option<String>,

        /// Restrict to one placement
        #[arg(long)]
        placement: Option<i64>,

        /// Highlight a prospective range start (YYYY-MM-DD)
        #[arg(long, requires = "end")]
        start: Option<chrono::NaiveDate>,

        /// Highlight a prospective range end (YYYY-MM-DD)
        #[arg(long, requires = "start")]
        end: Option<chrono::NaiveDate>,
    },

    /// Aggregate booking statistics
    Stats,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BookingStatusFilter {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PLACEMENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PlacementsArgs {
    #[command(subcommand)]
    pub command: PlacementsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlacementsCommand {
    /// List placements and their per-day rates
    #[command(alias = "ls")]
    List,

    /// Get placement details
    Get {
        /// Placement id
        id: i64,
    },

    /// Check whether a placement is free for a date range
    Availability {
        /// Placement id
        id: i64,

        /// First day (YYYY-MM-DD)
        #[arg(long, required = true)]
        start: chrono::NaiveDate,

        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long, required = true)]
        end: chrono::NaiveDate,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FILES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FilesArgs {
    #[command(subcommand)]
    pub command: FilesCommand,
}

#[derive(Debug, Subcommand)]
pub enum FilesCommand {
    /// List uploaded files
    #[command(alias = "ls")]
    List,

    /// Upload one or more files (concurrent batch)
    Upload {
        /// Files to upload
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Link an uploaded file to an ad
    Link {
        /// File id
        file_id: i64,

        /// Ad id
        #[arg(long, required = true)]
        ad: i64,
    },

    /// Delete an uploaded file
    Rm {
        /// File id
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PAYMENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PaymentsArgs {
    #[command(subcommand)]
    pub command: PaymentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PaymentsCommand {
    /// List payments
    #[command(alias = "ls")]
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,
    },

    /// Record a payment for a booking
    Create {
        /// Booking id
        #[arg(long, required = true)]
        booking: i64,

        /// Amount (e.g. 150.00)
        #[arg(long, required = true)]
        amount: rust_decimal::Decimal,

        /// Payment method label
        #[arg(long)]
        method: Option<String>,
    },

    /// Aggregate payment statistics
    Stats,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NOTIFICATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// List notifications
    #[command(alias = "ls")]
    List,

    /// Mark one notification as read
    Read {
        /// Notification id
        id: i64,
    },

    /// Mark every notification as read
    ReadAll,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
