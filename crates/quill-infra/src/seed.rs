//! Demo blog content loaded into the in-memory repositories.

use chrono::NaiveDate;

use quill_core::domain::{Comment, Post, User};

const JOHN_AVATAR: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150";
const JANE_AVATAR: &str =
    "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=150";

const GETTING_STARTED_EXCERPT: &str =
    "Learn how to set up a new React project with TypeScript and the benefits it brings to your development workflow.";
const MODERN_CSS_EXCERPT: &str =
    "Explore the latest CSS features and techniques that can transform your web development workflow.";
const PERSONAL_BLOG_EXCERPT: &str =
    "Learn how to create your own personal blog using React with Markdown support for content creation.";

const GETTING_STARTED: &str = r##"# Getting Started with React and TypeScript

TypeScript has become increasingly popular in the React ecosystem, and for good reason. It adds static type checking to your JavaScript code, helping catch errors early in the development process.

## Setting Up a New Project

To create a new React project with TypeScript, you can use Create React App with the TypeScript template:

```bash
npx create-react-app my-app --template typescript
```

## Benefits of TypeScript

1. **Type Safety**: TypeScript helps catch errors during development rather than at runtime.
2. **Better IDE Support**: You'll get improved autocomplete, navigation, and refactoring capabilities.
3. **Enhanced Documentation**: Types serve as documentation that's always up to date.
4. **Improved Team Collaboration**: Makes it easier for teammates to understand and work with your code.

## Basic Type Examples

```tsx
// Typing component props
interface ButtonProps {
  text: string;
  onClick: () => void;
  disabled?: boolean;
}

const Button: React.FC<ButtonProps> = ({ text, onClick, disabled = false }) => {
  return (
    <button onClick={onClick} disabled={disabled}>
      {text}
    </button>
  );
};

// Using the component
function App() {
  return (
    <Button 
      text="Click Me" 
      onClick={() => console.log('Button clicked')} 
    />
  );
}
```

This is just the beginning! TypeScript offers many more features to make your React development more robust and maintainable.
"##;

const MODERN_CSS: &str = r##"# Modern CSS Techniques Every Developer Should Know

CSS has evolved significantly in recent years, introducing powerful features that make styling more flexible and less dependent on JavaScript. Here are some modern CSS techniques that every developer should know.

## CSS Grid Layout

CSS Grid is a two-dimensional layout system that revolutionizes how we structure web pages:

```css
.container {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
  gap: 1rem;
}
```

## CSS Custom Properties (Variables)

Custom properties bring true variables to CSS:

```css
:root {
  --primary-color: #3b82f6;
  --secondary-color: #f59e0b;
}

.button {
  background-color: var(--primary-color);
  color: white;
}

.button:hover {
  background-color: var(--secondary-color);
}
```

## CSS Logical Properties

Logical properties help create more adaptable layouts across different writing modes and reading directions:

```css
.element {
  margin-inline: 1rem; /* horizontal margin */
  padding-block: 0.5rem; /* vertical padding */
}
```

## Container Queries

Container queries allow you to apply styles based on the size of a parent container rather than the viewport:

```css
.container {
  container-type: inline-size;
}

@container (min-width: 400px) {
  .card {
    display: flex;
  }
}
```

Stay up-to-date with these modern CSS techniques to build more responsive, maintainable, and powerful web interfaces.
"##;

const PERSONAL_BLOG: &str = r##"# Building a Personal Blog with React and Markdown

Creating a personal blog is a great way to share your thoughts and showcase your work. In this post, we'll explore how to build a blog using React with Markdown support for content creation.

## Why React and Markdown?

React provides a component-based architecture that makes it easy to build interactive UIs, while Markdown offers a simple syntax for writing content without dealing with complex HTML.

## Setting Up the Project

First, create a new React project:

```bash
npm create vite@latest my-blog -- --template react-ts
cd my-blog
npm install
```

## Adding Markdown Support

Install a Markdown parser like remark:

```bash
npm install remark remark-html react-markdown
```

## Creating the Blog Post Component

```tsx
import React from 'react';
import ReactMarkdown from 'react-markdown';

interface BlogPostProps {
  title: string;
  content: string;
  publishedDate: string;
}

const BlogPost: React.FC<BlogPostProps> = ({ title, content, publishedDate }) => {
  return (
    <article className="blog-post">
      <h1>{title}</h1>
      <time>{publishedDate}</time>
      <ReactMarkdown>{content}</ReactMarkdown>
    </article>
  );
};

export default BlogPost;
```

## Adding Authentication

For a personal blog, you'll want to add authentication to control who can create and edit posts:

```tsx
// Simple authentication context
import React, { createContext, useState, useContext } from 'react';

const AuthContext = createContext(null);

export const AuthProvider = ({ children }) => {
  const [user, setUser] = useState(null);

  const login = (username, password) => {
    // Implement your authentication logic here
    setUser({ username });
  };

  const logout = () => {
    setUser(null);
  };

  return (
    <AuthContext.Provider value={{ user, login, logout }}>
      {children}
    </AuthContext.Provider>
  );
};

export const useAuth = () => useContext(AuthContext);
```

Building your own blog gives you complete control over the design and functionality, and it's a great way to showcase your skills as a developer.
"##;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Cover photo URL for a stock photo id.
fn cover(photo: &str) -> Option<String> {
    Some(format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750"
    ))
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// The account behind the demo credentials.
pub fn demo_user() -> User {
    User::new("1", "John Doe", "john@example.com").with_avatar(JOHN_AVATAR)
}

pub fn users() -> Vec<User> {
    vec![
        demo_user(),
        User::new("2", "Jane Smith", "jane@example.com").with_avatar(JANE_AVATAR),
    ]
}

pub fn posts() -> Vec<Post> {
    let [john, jane] = [demo_user(), users()[1].clone()];

    vec![
        Post {
            id: "1".to_string(),
            title: "Getting Started with React and TypeScript".to_string(),
            excerpt: GETTING_STARTED_EXCERPT.to_string(),
            content: GETTING_STARTED.to_string(),
            cover_image: cover("11035380"),
            tags: tags(&["React", "TypeScript", "Web Development"]),
            category: "Programming".to_string(),
            author: john.clone(),
            published_at: date(2023, 3, 15),
            updated_at: date(2023, 3, 15),
            is_published: true,
        },
        Post {
            id: "2".to_string(),
            title: "Modern CSS Techniques Every Developer Should Know".to_string(),
            excerpt: MODERN_CSS_EXCERPT.to_string(),
            content: MODERN_CSS.to_string(),
            cover_image: cover("11035471"),
            tags: tags(&["CSS", "Web Design", "Frontend"]),
            category: "Web Development".to_string(),
            author: jane,
            published_at: date(2023, 4, 22),
            updated_at: date(2023, 4, 28),
            is_published: true,
        },
        Post {
            id: "3".to_string(),
            title: "Building a Personal Blog with React and Markdown".to_string(),
            excerpt: PERSONAL_BLOG_EXCERPT.to_string(),
            content: PERSONAL_BLOG.to_string(),
            cover_image: cover("577585"),
            tags: tags(&["React", "Markdown", "Blog"]),
            category: "Web Development".to_string(),
            author: john,
            published_at: date(2023, 5, 10),
            updated_at: date(2023, 5, 12),
            is_published: true,
        },
    ]
}

pub fn comments() -> Vec<Comment> {
    let [john, jane] = [demo_user(), users()[1].clone()];
    // Commenters need not be registered users.
    let alex = User::new("3", "Alex Johnson", "alex@example.com");

    vec![
        Comment::new(
            "1".to_string(),
            "1",
            jane,
            "This is a great introduction to TypeScript with React. I've been wanting to learn more about it!",
            date(2023, 3, 16),
        ),
        Comment::new(
            "2".to_string(),
            "1",
            alex,
            "I've been using TypeScript for a while now and can definitely vouch for its benefits. The type safety alone has saved me from countless bugs.",
            date(2023, 3, 17),
        ),
        Comment::new(
            "3".to_string(),
            "2",
            john,
            "CSS Grid has completely changed how I approach layouts. Great overview of modern techniques!",
            date(2023, 4, 23),
        ),
    ]
}
