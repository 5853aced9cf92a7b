use chrono::Datelike;
use yew::prelude::*;

use crate::animation::animator::Animator;
use crate::components::copy_email::CopyEmail;
use crate::components::cursor::Cursor;
use crate::components::header::Header;
use crate::dom;
use crate::error::SetupError;
use crate::scene::space::{Background, SpaceScene, CANVAS_ID};

pub const CONTACT_EMAIL: &str = "hello@launchpad.dev";

struct Project {
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Orbit",
        summary: "Realtime telemetry dashboard for a fleet of weather balloons.",
        tags: &["Rust", "WebSockets", "WebGL"],
    },
    Project {
        title: "Countdown",
        summary: "Launch-window planner that turns orbital data into a schedule.",
        tags: &["TypeScript", "D3"],
    },
    Project {
        title: "Payload",
        summary: "Static site generator that ships pages under 20kB.",
        tags: &["Rust", "Markdown"],
    },
];

struct SkillCategory {
    title: &'static str,
    skills: &'static [&'static str],
}

const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &["Yew", "WebAssembly", "three.js", "CSS animation"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Rust", "Axum", "PostgreSQL", "Redis"],
    },
    SkillCategory {
        title: "Tooling",
        skills: &["Trunk", "GitHub Actions", "Docker"],
    },
];

/// Scene and animations installed once the page is in the DOM.
#[derive(Default)]
struct Enhancements {
    _background: Option<Background>,
    _animator: Option<Animator>,
}

fn installed<T>(feature: &str, result: Result<T, SetupError>) -> Option<T> {
    match result {
        Ok(value) => {
            log::info!("{} installed", feature);
            Some(value)
        }
        Err(err) => {
            err.log(feature);
            None
        }
    }
}

fn enhance_page() -> Enhancements {
    let (window, document) = match dom::window_and_document() {
        Ok(found) => found,
        Err(err) => {
            err.log("page enhancements");
            return Enhancements::default();
        }
    };

    // Without three.js only the background is lost; the rest of the page
    // still animates.
    let background = SpaceScene::new(&window, &document)
        .and_then(|space| Background::install(&window, &document, space));

    Enhancements {
        _background: installed("background scene", background),
        _animator: Some(Animator::install(&window, &document)),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            let enhancements = enhance_page();
            move || drop(enhancements)
        },
        (),
    );

    let year = chrono::Local::now().year();

    html! {
        <div class="home-page">
            <canvas id={CANVAS_ID}></canvas>
            <Cursor />
            <Header />
            <main>
                <section class="hero" data-section="home" id="home">
                    <h1 class="animate-on-scroll">{"Building things that leave the atmosphere."}</h1>
                    <p class="hero-subtitle animate-on-scroll">
                        {"Engineer working on fast, small and slightly over-animated software."}
                    </p>
                    <a href="#projects" class="hero-cta animate-on-scroll">{"See the work"}</a>
                </section>

                <section class="about" data-section="about" id="about">
                    <h2 class="animate-on-scroll">{"About"}</h2>
                    <p class="animate-on-scroll">
                        {"I design and build web applications end to end, from the database schema to the last easing curve. Most of my recent work is Rust compiled to WebAssembly."}
                    </p>
                </section>

                <section class="projects" data-section="projects" id="projects">
                    <h2 class="animate-on-scroll">{"Projects"}</h2>
                    <div class="project-grid">
                        {
                            for PROJECTS.iter().map(|project| html! {
                                <article class="project-card">
                                    <h3>{project.title}</h3>
                                    <p>{project.summary}</p>
                                    <div class="tags">
                                        { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                                    </div>
                                </article>
                            })
                        }
                    </div>
                </section>

                <section class="skills" data-section="skills" id="skills">
                    <h2 class="animate-on-scroll">{"Skills"}</h2>
                    <div class="skill-grid">
                        {
                            for SKILLS.iter().map(|category| html! {
                                <div class="skill-category">
                                    <h4>{category.title}</h4>
                                    <ul>
                                        { for category.skills.iter().map(|skill| html! { <li>{*skill}</li> }) }
                                    </ul>
                                </div>
                            })
                        }
                    </div>
                </section>

                // Extra scroll distance so the launch can finish before the footer.
                <div class="scroll-spacer"></div>
            </main>

            <footer class="contact" data-section="contact" id="contact">
                <h2 class="animate-on-scroll">{"Get in touch"}</h2>
                <p class="animate-on-scroll">{"Open to freelance work and interesting problems."}</p>
                <CopyEmail email={CONTACT_EMAIL} />
                <p class="copyright">{format!("© {} launchpad", year)}</p>
            </footer>

            <style>
                {r#"
                    :root {
                        --bg-color: #0a0a14;
                        --text-color: #f2f2f7;
                        --muted-color: #9a9ab0;
                        --accent-color: #ff8c42;
                    }
                    body {
                        margin: 0;
                        background: var(--bg-color);
                        color: var(--text-color);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        cursor: none;
                    }
                    #bg-canvas {
                        position: fixed;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        z-index: -1;
                    }
                    main section,
                    .contact {
                        min-height: 100vh;
                        padding: 8rem 2rem 4rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        box-sizing: border-box;
                    }
                    .hero h1 {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        max-width: 14ch;
                    }
                    .hero-cta {
                        display: inline-block;
                        margin-top: 2rem;
                        padding: 0.9rem 1.8rem;
                        border: 1px solid var(--accent-color);
                        border-radius: 999px;
                        color: var(--accent-color);
                        text-decoration: none;
                    }
                    .project-grid,
                    .skill-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .project-card,
                    .skill-category {
                        padding: 1.5rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        backdrop-filter: blur(6px);
                    }
                    .tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .tag {
                        font-size: 0.8rem;
                        padding: 0.2rem 0.6rem;
                        border-radius: 999px;
                        background: rgba(255, 140, 66, 0.12);
                        color: var(--accent-color);
                    }
                    .skill-category ul {
                        padding-left: 1.2rem;
                        color: var(--muted-color);
                    }
                    .scroll-spacer {
                        height: 100vh;
                    }
                    .email-copy {
                        display: inline-flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 0.8rem 1.2rem;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.05);
                        font-size: 1.2rem;
                    }
                    .copy-btn {
                        min-width: 5rem;
                        background: none;
                        border: none;
                        color: var(--accent-color);
                    }
                    .copyright {
                        margin-top: 4rem;
                        color: var(--muted-color);
                        font-size: 0.85rem;
                    }
                "#}
            </style>
        </div>
    }
}
