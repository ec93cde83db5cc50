//! Interactive shell.
//!
//! Posts and comments live in memory for as long as the shell runs; the
//! session survives restarts through the configured storage.

use anyhow::Result;
use quill_core::PostQuery;
use quill_core::listing::BlogListing;
use quill_shared::{EDITOR_CATEGORIES, LoginForm, PostForm, RegisterForm};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::handlers::{auth, editor, posts};
use crate::render;
use crate::state::AppState;

const END_OF_CONTENT: &str = ".";

pub struct Shell {
    state: AppState,
    listing: BlogListing,
    rl: DefaultEditor,
}

impl Shell {
    pub async fn new(state: AppState) -> Result<Self> {
        let listing = state.reader.listing(state.category_policy).await?;
        Ok(Self {
            state,
            listing,
            rl: DefaultEditor::new()?,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        println!("quill - type help for commands, exit to quit");
        render::print_session(&self.state.session.state());

        loop {
            match self.rl.readline("quill> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.rl.add_history_entry(line)?;

                    match self.dispatch(line).await {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => match e.downcast_ref::<ReadlineError>() {
                            Some(ReadlineError::Interrupted | ReadlineError::Eof) => {
                                println!("Cancelled");
                            }
                            _ => eprintln!("Error: {e}"),
                        },
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Input error: {e}");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Run one command line. Returns `true` when the shell should exit.
    async fn dispatch(&mut self, line: &str) -> Result<bool> {
        let (cmd, arg) = match line.split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "exit" | "quit" => return Ok(true),
            "help" => print_help(),
            "list" => render::print_posts(self.listing.visible()),
            "search" => {
                self.listing.set_search(arg);
                println!("Search text: {:?} (run `submit` to apply)", arg);
            }
            "submit" => render::print_posts(self.listing.submit_search()),
            "category" => {
                let category = match arg {
                    "" | "all" | "All" => None,
                    c => Some(c.to_string()),
                };
                render::print_posts(self.listing.select_category(category));
            }
            "categories" => render::print_categories(
                &self.listing.categories(),
                self.listing.selected_category(),
            ),
            "show" => render::print_detail(&posts::show(&self.state, required(arg)?).await?),
            "tag" => render::print_posts(&posts::tagged(&self.state, required(arg)?).await?),
            "archive" => render::print_archive(&posts::archive(&self.state).await?),
            "dashboard" => render::print_dashboard(&posts::dashboard(&self.state).await?),
            "whoami" => render::print_session(&auth::whoami(&self.state)),
            "login" => self.login().await?,
            "register" => self.register().await?,
            "logout" => {
                auth::logout(&self.state).await?;
                println!("Logged out");
            }
            "new" => self.create().await?,
            "edit" => self.edit(required(arg)?).await?,
            "delete" => self.delete(required(arg)?).await?,
            "comment" => self.comment(arg).await?,
            other => println!("Unknown command: {other} (type help)"),
        }
        Ok(false)
    }

    async fn login(&mut self) -> Result<()> {
        let form = LoginForm {
            email: self.rl.readline("Email: ")?,
            password: self.rl.readline("Password: ")?,
        };
        let user = auth::login(&self.state, form).await?;
        println!("Welcome back, {}", user.name);
        Ok(())
    }

    async fn register(&mut self) -> Result<()> {
        let form = RegisterForm {
            name: self.rl.readline("Name: ")?,
            email: self.rl.readline("Email: ")?,
            password: self.rl.readline("Password: ")?,
            confirm_password: self.rl.readline("Confirm password: ")?,
        };
        let user = auth::register(&self.state, form).await?;
        println!("Welcome, {}", user.name);
        Ok(())
    }

    async fn create(&mut self) -> Result<()> {
        let form = self.fill_form(PostForm::default())?;
        let post = editor::create(&self.state, form).await?;
        println!("Created post {}", post.id);
        self.refresh().await
    }

    async fn edit(&mut self, id: &str) -> Result<()> {
        let current = editor::load(&self.state, id).await?;
        let form = self.fill_form(current)?;
        let post = editor::update(&self.state, id, form).await?;
        println!("Updated post {}", post.id);
        self.refresh().await
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        // Missing or foreign posts fail before the prompt.
        editor::load(&self.state, id).await?;
        let answer = self.rl.readline("Are you sure you want to delete this post? [y/N] ")?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Kept post {id}");
            return Ok(());
        }
        editor::delete(&self.state, id).await?;
        println!("Deleted post {id}");
        self.refresh().await
    }

    async fn comment(&mut self, arg: &str) -> Result<()> {
        let (post_id, text) = match arg.split_once(' ') {
            Some((id, text)) => (id, text.to_string()),
            None => (required(arg)?, self.rl.readline("Comment: ")?),
        };
        let comment = editor::comment(&self.state, post_id, &text).await?;
        println!("Comment added by {}", comment.author.name);
        Ok(())
    }

    /// Prompt for every editor field, prefilled with `form`.
    fn fill_form(&mut self, form: PostForm) -> Result<PostForm> {
        println!("Categories: {}", EDITOR_CATEGORIES.join(", "));
        let title = self.rl.readline_with_initial("Title: ", (form.title.as_str(), ""))?;
        let category = self
            .rl
            .readline_with_initial("Category: ", (form.category.as_str(), ""))?;
        let excerpt = self
            .rl
            .readline_with_initial("Excerpt (optional): ", (form.excerpt.as_str(), ""))?;
        let cover_image = self.rl.readline_with_initial(
            "Cover image URL (optional): ",
            (form.cover_image.as_str(), ""),
        )?;
        let tags = self
            .rl
            .readline_with_initial("Tags (comma separated): ", (form.tags.as_str(), ""))?;
        let content = self.read_content(&form.content)?;
        let published = self.rl.readline_with_initial(
            "Publish? [y/N] ",
            (if form.is_published { "y" } else { "n" }, ""),
        )?;

        Ok(PostForm {
            title,
            content,
            excerpt,
            cover_image,
            category,
            tags,
            is_published: matches!(published.trim(), "y" | "Y" | "yes"),
        })
    }

    /// Read markdown content up to a line holding only `.`.
    /// An immediately terminated block keeps `current`.
    fn read_content(&mut self, current: &str) -> Result<String> {
        println!("Content (markdown), end with a line containing only {END_OF_CONTENT}");
        if !current.is_empty() {
            println!("(end right away to keep the current content)");
        }

        let mut lines = Vec::new();
        loop {
            let line = self.rl.readline("| ")?;
            if line.trim_end() == END_OF_CONTENT {
                break;
            }
            lines.push(line);
        }

        if lines.is_empty() {
            return Ok(current.to_string());
        }
        Ok(lines.join("\n"))
    }

    /// Reload the listing after posts changed, keeping search and category.
    async fn refresh(&mut self) -> Result<()> {
        let posts = self.state.reader.search(&PostQuery::default()).await?;
        self.listing.reload(posts);
        Ok(())
    }
}

fn required(arg: &str) -> Result<&str> {
    if arg.is_empty() {
        anyhow::bail!("This command needs an argument (type help)");
    }
    Ok(arg)
}

fn print_help() {
    println!("Reading:");
    println!("  list               - show the current listing");
    println!("  search <text>      - set the search text");
    println!("  submit             - apply the search text");
    println!("  category [name]    - filter by category (no name for all)");
    println!("  categories         - list categories");
    println!("  show <id>          - read a post and its comments");
    println!("  tag <tag>          - posts with a tag");
    println!("  archive            - posts grouped by year");
    println!("Account:");
    println!("  login | register | logout | whoami");
    println!("Writing:");
    println!("  dashboard          - your posts");
    println!("  new                - write a post");
    println!("  edit <id>          - edit one of your posts");
    println!("  delete <id>        - delete one of your posts");
    println!("  comment <id> [text]- comment on a post");
    println!("  exit               - quit");
}
