use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Column};
use iced::{Color, Element, Length, Task, Theme};
use tracing::info;

use portfolio_catalog::catalog::category::{self, CategoryFilter};
use portfolio_catalog::state::data::{DetailView, SkillTile};
use portfolio_catalog::{
    logging, ArchiveParams, NavAction, Navigator, NotFound, PortfolioConfig, ProjectRecord,
    ProjectStore, Route, Screen, SortOrder, ViewController, ViewState,
};

/// Main application state
struct Portfolio {
    /// The project catalog, loaded once at startup
    store: ProjectStore,
    /// Which screen is showing
    controller: ViewController,
    /// Passed through to the theme only
    dark_mode: bool,
    tag_preview_limit: usize,
    category_options: Vec<CategoryFilter>,
    /// Deep link that did not resolve, shown until the next navigation
    missing: Option<NotFound>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Any screen change (cards, tiles, back button)
    Navigate(NavAction),
    SearchChanged(String),
    CategoryFilterChanged(CategoryFilter),
    SortChanged(SortOrder),
    ToggleDarkMode,
}

impl Portfolio {
    /// Create a new instance of the application
    fn new(
        store: ProjectStore,
        config: PortfolioConfig,
        start: Result<ViewState, NotFound>,
    ) -> (Self, Task<Message>) {
        let (view, missing) = match start {
            Ok(view) => (view, None),
            Err(missing) => (ViewState::Home, Some(missing)),
        };

        (
            Portfolio {
                store,
                controller: ViewController::starting_at(view),
                dark_mode: config.dark_mode,
                tag_preview_limit: config.tag_preview_limit,
                category_options: category::filter_options(),
                missing,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let action = match message {
            Message::Navigate(action) => action,
            Message::SearchChanged(query) => NavAction::SetSearch { query },
            Message::CategoryFilterChanged(category) => NavAction::SetCategoryFilter { category },
            Message::SortChanged(order) => NavAction::SetSortOrder { order },
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                return Task::none();
            }
        };

        self.missing = None;
        let view = self.controller.dispatch(action);
        info!(path = %Route::from_view(view).to_path(), "navigated");
        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let navigator = Navigator::new(&self.store);
        let screen = match &self.missing {
            Some(missing) => Screen::Detail(Err(missing.clone())),
            None => Screen::resolve(self.controller.current(), &navigator),
        };

        let header = row![
            button(text("PORTFOLIO").size(20)).on_press(Message::Navigate(NavAction::GoHome)),
            button(text(if self.dark_mode { "Light mode" } else { "Dark mode" }))
                .on_press(Message::ToggleDarkMode),
        ]
        .spacing(20);

        let body = match screen {
            Screen::Home {
                featured,
                skills,
                project_count,
            } => self.home_view(featured, skills, project_count),
            Screen::Archive { params, projects } => self.archive_view(params, projects),
            Screen::Category {
                category_name,
                projects,
            } => self.category_view(category_name, projects),
            Screen::Detail(Ok(detail)) => detail_view(detail),
            Screen::Detail(Err(missing)) => not_found_view(missing),
        };

        container(column![header, scrollable(body)].spacing(20).padding(40))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn home_view<'a>(
        &self,
        featured: Vec<&'a ProjectRecord>,
        skills: &'a [SkillTile],
        project_count: usize,
    ) -> Element<'a, Message> {
        let tiles = skills.iter().map(|tile| {
            Element::from(
                button(column![
                    text(&tile.category).size(20),
                    text(tile.skills.join(" · ")).size(12),
                ])
                .on_press(Message::Navigate(NavAction::SelectCategory {
                    category_name: tile.category.clone(),
                }))
                .padding(12),
            )
        });

        column![
            text(format!("{project_count} PROJECTS")).size(14),
            text("SKILLS").size(28),
            Column::with_children(tiles).spacing(10),
            text("FEATURED PROJECTS").size(28),
            project_list(featured, self.tag_preview_limit),
            button(text("VIEW ALL PROJECTS")).on_press(Message::Navigate(NavAction::ViewArchive)),
        ]
        .spacing(20)
        .into()
    }

    fn archive_view<'a>(
        &'a self,
        params: &'a ArchiveParams,
        projects: Vec<&'a ProjectRecord>,
    ) -> Element<'a, Message> {
        let controls = row![
            text_input("Search projects...", &params.search_query)
                .on_input(Message::SearchChanged)
                .width(Length::Fill),
            pick_list(
                self.category_options.as_slice(),
                Some(&params.category),
                Message::CategoryFilterChanged,
            ),
            pick_list(SortOrder::ALL, Some(params.sort_order), Message::SortChanged),
        ]
        .spacing(10);

        let results: Element<'a, Message> = if projects.is_empty() {
            column![
                text("No projects found matching your criteria."),
                button(text("Clear filters")).on_press(Message::Navigate(NavAction::ClearFilters)),
            ]
            .spacing(10)
            .into()
        } else {
            project_list(projects, self.tag_preview_limit)
        };

        column![
            button(text("GO BACK")).on_press(Message::Navigate(NavAction::GoHome)),
            text("PROJECT ARCHIVE").size(28),
            controls,
            results,
        ]
        .spacing(20)
        .into()
    }

    fn category_view<'a>(
        &self,
        category_name: &'a str,
        projects: Vec<&'a ProjectRecord>,
    ) -> Element<'a, Message> {
        column![
            button(text("GO BACK")).on_press(Message::Navigate(NavAction::GoHome)),
            text(category_name).size(28),
            text(format!("{} PROJECTS", projects.len())).size(14),
            project_list(projects, self.tag_preview_limit),
        ]
        .spacing(20)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn project_list(projects: Vec<&ProjectRecord>, tag_limit: usize) -> Element<'_, Message> {
    Column::with_children(projects.into_iter().map(|project| project_card(project, tag_limit)))
        .spacing(10)
        .into()
}

fn project_card(project: &ProjectRecord, tag_limit: usize) -> Element<'_, Message> {
    let (shown, hidden) = project.tag_preview(tag_limit);
    let mut tags = shown.join(" · ");
    if hidden > 0 {
        tags.push_str(&format!(" +{hidden}"));
    }
    let style = category::style_for(&project.category);

    button(
        column![
            text(&project.title).size(20),
            text(format!("{:?} · {}", style.icon, project.category))
                .size(12)
                .color(accent_color(style.accent)),
            text(&project.description).size(14),
            text(tags).size(12),
        ]
        .spacing(6),
    )
    .on_press(Message::Navigate(NavAction::SelectProject {
        project_title: project.title.clone(),
    }))
    .width(Length::Fill)
    .padding(12)
    .into()
}

fn accent_color(accent: &str) -> Color {
    match accent {
        "blue" => Color::from_rgb8(0x3b, 0x82, 0xf6),
        "purple" => Color::from_rgb8(0xa8, 0x55, 0xf7),
        "green" => Color::from_rgb8(0x22, 0xc5, 0x5e),
        "orange" => Color::from_rgb8(0xf9, 0x73, 0x16),
        _ => Color::from_rgb8(0x9c, 0xa3, 0xaf),
    }
}

fn detail_view(detail: DetailView<'_>) -> Element<'_, Message> {
    let features: Element<'_, Message> = if detail.features.is_empty() {
        text("Detailed feature list unavailable.").into()
    } else {
        Column::with_children(
            detail
                .features
                .iter()
                .map(|feature| Element::from(text(format!("• {feature}")))),
        )
        .spacing(4)
        .into()
    };

    let mut content = column![
        button(text("GO BACK")).on_press(Message::Navigate(NavAction::GoHome)),
        text(&detail.project.title).size(36),
        text(&detail.project.category).size(14),
        text("OVERVIEW").size(20),
        text(detail.overview),
        text("KEY FEATURES").size(20),
        features,
        text("INSTALLATION").size(20),
        text(detail.installation),
        text("USAGE").size(20),
        text(detail.usage),
    ]
    .spacing(12);

    if let Some(tree) = detail.file_structure {
        content = content.push(text("FILE STRUCTURE").size(20)).push(text(tree).size(12));
    }

    content.into()
}

fn not_found_view(missing: NotFound) -> Element<'static, Message> {
    column![
        text("Project not found").size(28),
        text(missing.identifier).size(14),
        button(text("Return to Archives")).on_press(Message::Navigate(NavAction::ViewArchive)),
    ]
    .spacing(12)
    .into()
}

fn main() -> anyhow::Result<()> {
    let (config, config_source) = PortfolioConfig::load()?;
    logging::init(&config.log_filter);
    config_source.log();

    // A bad data set is fatal: the catalog cannot run without its store
    let store = ProjectStore::load(config.data_file.as_deref())?;

    // Optional deep link, e.g. `portfolio /project/RecipeMedia`
    let start = match std::env::args().nth(1) {
        Some(path) => Route::parse(&path).open(&Navigator::new(&store)),
        None => Ok(ViewState::Home),
    };

    info!(
        projects = store.len(),
        start = start.as_ref().map_or("not found", ViewState::name),
        dark_mode = config.dark_mode,
        "starting portfolio"
    );

    iced::application("Portfolio", Portfolio::update, Portfolio::view)
        .theme(Portfolio::theme)
        .centered()
        .run_with(move || Portfolio::new(store, config, start))
        .map_err(|err| anyhow::anyhow!("failed to run the window: {err}"))
}
