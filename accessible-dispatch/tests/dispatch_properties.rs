//! Property-based tests for association synchronization.
//!
//! Random sequences of association mutations, issued from either side, must
//! keep both ends of every link mirrored after each step.

mod common;

use accessible_dispatch::ObjectGraph;
use accessible_types::{ObjectId, Value};
use common::blog_graph;
use proptest::prelude::*;

const USERS: usize = 3;
const POSTS: usize = 4;
const TAGS: usize = 3;

#[derive(Debug, Clone)]
enum Op {
    SetAuthor { post: usize, user: Option<usize> },
    AddPost { user: usize, post: usize },
    RemovePost { user: usize, post: usize },
    AddTag { post: usize, tag: usize },
    RemoveTag { post: usize, tag: usize },
    TagAddPost { tag: usize, post: usize },
    TagRemovePost { tag: usize, post: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..POSTS, prop::option::of(0..USERS)).prop_map(|(post, user)| Op::SetAuthor { post, user }),
        (0..USERS, 0..POSTS).prop_map(|(user, post)| Op::AddPost { user, post }),
        (0..USERS, 0..POSTS).prop_map(|(user, post)| Op::RemovePost { user, post }),
        (0..POSTS, 0..TAGS).prop_map(|(post, tag)| Op::AddTag { post, tag }),
        (0..POSTS, 0..TAGS).prop_map(|(post, tag)| Op::RemoveTag { post, tag }),
        (0..TAGS, 0..POSTS).prop_map(|(tag, post)| Op::TagAddPost { tag, post }),
        (0..TAGS, 0..POSTS).prop_map(|(tag, post)| Op::TagRemovePost { tag, post }),
    ]
}

struct World {
    graph: ObjectGraph,
    users: Vec<ObjectId>,
    posts: Vec<ObjectId>,
    tags: Vec<ObjectId>,
}

impl World {
    fn new() -> Self {
        let mut graph = blog_graph();
        let users = (0..USERS).map(|_| graph.create("User").unwrap()).collect();
        let posts = (0..POSTS).map(|_| graph.create("Post").unwrap()).collect();
        let tags = (0..TAGS).map(|_| graph.create("Tag").unwrap()).collect();
        Self { graph, users, posts, tags }
    }

    fn apply(&mut self, op: &Op) {
        let (target, method, arg) = match *op {
            Op::SetAuthor { post, user } => (
                self.posts[post],
                "setAuthor",
                user.map_or(Value::Null, |u| Value::Ref(self.users[u])),
            ),
            Op::AddPost { user, post } => (self.users[user], "addPost", Value::Ref(self.posts[post])),
            Op::RemovePost { user, post } => (self.users[user], "removePost", Value::Ref(self.posts[post])),
            Op::AddTag { post, tag } => (self.posts[post], "addTag", Value::Ref(self.tags[tag])),
            Op::RemoveTag { post, tag } => (self.posts[post], "removeTag", Value::Ref(self.tags[tag])),
            Op::TagAddPost { tag, post } => (self.tags[tag], "addPost", Value::Ref(self.posts[post])),
            Op::TagRemovePost { tag, post } => (self.tags[tag], "removePost", Value::Ref(self.posts[post])),
        };
        self.graph.invoke(target, method, &[arg]).unwrap();
    }

    fn get(&mut self, id: ObjectId, method: &str) -> Value {
        self.graph.invoke(id, method, &[]).unwrap()
    }

    fn check_mirrored(&mut self) -> Result<(), TestCaseError> {
        for &p in &self.posts.clone() {
            let author = self.get(p, "getAuthor");
            for &u in &self.users.clone() {
                let listed = self.get(u, "getPosts").contains(&Value::Ref(p));
                prop_assert_eq!(author == Value::Ref(u), listed, "author/posts disagree");
            }
            let tags = self.get(p, "getTags");
            for &t in &self.tags.clone() {
                let tagged = tags.contains(&Value::Ref(t));
                let listed = self.get(t, "getPosts").contains(&Value::Ref(p));
                prop_assert_eq!(tagged, listed, "tags/posts disagree");
            }
        }
        Ok(())
    }
}

proptest! {
    /// Every accepted mutation leaves both ends of each association in agreement.
    #[test]
    fn associations_stay_mirrored(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut world = World::new();
        for op in &ops {
            world.apply(op);
            world.check_mirrored()?;
        }
    }

    /// A post has at most one author, and only that author lists it.
    #[test]
    fn post_has_single_owner(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut world = World::new();
        for op in &ops {
            world.apply(op);
        }
        for &p in &world.posts.clone() {
            let mut owners = 0;
            for &u in &world.users.clone() {
                if world.get(u, "getPosts").contains(&Value::Ref(p)) {
                    owners += 1;
                }
            }
            prop_assert!(owners <= 1);
        }
    }
}
