//! Static definition of the GitLab toolsets and their tools.

use std::sync::Arc;

use toolset_primitives::{ParameterType, ToolDescriptor, ToolKind, ToolName, ToolParameter, ToolsetName};
use toolset_registry::Toolset;
use toolset_tools::ServerTool;

use crate::backend::GitLabBackend;
use crate::error::CatalogResult;
use crate::handler::BackendTool;

/// Token and notification management.
pub const TOKEN_MANAGEMENT: &str = "token_management";
/// Per-directory project selection.
pub const PROJECT_CONFIG: &str = "project_config";
/// Projects, files, branches and commits.
pub const PROJECTS: &str = "projects";
/// Issues, comments, labels and milestones.
pub const ISSUES: &str = "issues";
/// Merge requests and their comments.
pub const MERGE_REQUESTS: &str = "merge_requests";
/// Security scan results.
pub const SECURITY: &str = "security";
/// User lookup.
pub const USERS: &str = "users";
/// Scoped search.
pub const SEARCH: &str = "search";

pub(crate) struct ParamSpec {
    name: &'static str,
    kind: ParameterType,
    required: bool,
    description: &'static str,
}

pub(crate) struct ToolSpec {
    name: &'static str,
    title: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
}

pub(crate) struct ToolsetSpec {
    pub(crate) name: &'static str,
    description: &'static str,
    read: &'static [ToolSpec],
    write: &'static [ToolSpec],
}

const fn string(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParameterType::String,
        required: false,
        description,
    }
}

const fn number(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParameterType::Number,
        required: false,
        description,
    }
}

const fn boolean(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParameterType::Boolean,
        required: false,
        description,
    }
}

const fn required(mut param: ParamSpec) -> ParamSpec {
    param.required = true;
    param
}

const PROJECT_ID: ParamSpec = required(string("projectId", "The ID or URL-encoded path of the project."));
const ISSUE_IID: ParamSpec = required(number("issueIid", "The internal ID of the project issue."));
const MR_IID: ParamSpec = required(number("mergeRequestIid", "The internal ID of the merge request."));
const MILESTONE_ID: ParamSpec = required(number("milestoneId", "The ID of the project milestone."));
const NOTE_ID: ParamSpec = required(number("noteId", "The ID of the note."));
const PAGE: ParamSpec = number("page", "Page number for pagination (default 1).");
const PER_PAGE: ParamSpec = number("perPage", "Number of items per page (default 20, max 100).");
const GITLAB_HOST: ParamSpec = string("gitlabHost", "GitLab host URL, defaults to the configured host.");

pub(crate) const CATALOG: &[ToolsetSpec] = &[
    ToolsetSpec {
        name: TOKEN_MANAGEMENT,
        description: "Tools for managing GitLab tokens and authentication.",
        read: &[
            ToolSpec {
                name: "listTokens",
                title: "List Tokens",
                description: "Lists all configured GitLab tokens with their validation status and metadata.",
                params: &[],
            },
            ToolSpec {
                name: "validateToken",
                title: "Validate Token",
                description: "Manually validates a GitLab token by calling the GitLab API. If no token name is provided, validates all configured tokens.",
                params: &[string("name", "Name of the token to validate.")],
            },
            ToolSpec {
                name: "getNotifications",
                title: "Get Notifications",
                description: "Returns recent notifications about token issues, validation results, and other important messages.",
                params: &[],
            },
        ],
        write: &[
            ToolSpec {
                name: "addToken",
                title: "Add Token",
                description: "Adds a new GitLab token configuration to the runtime token store.",
                params: &[
                    required(string("name", "Unique name for the token.")),
                    required(string("token", "The GitLab personal access token.")),
                    GITLAB_HOST,
                ],
            },
            ToolSpec {
                name: "updateToken",
                title: "Update Token",
                description: "Updates an existing GitLab token. Validates the new token before updating.",
                params: &[
                    required(string("name", "Name of the token to update.")),
                    required(string("token", "The new GitLab personal access token.")),
                ],
            },
            ToolSpec {
                name: "removeToken",
                title: "Remove Token",
                description: "Removes a token from the runtime token store.",
                params: &[required(string("name", "Name of the token to remove."))],
            },
            ToolSpec {
                name: "clearNotifications",
                title: "Clear Notifications",
                description: "Clears all stored notifications.",
                params: &[],
            },
        ],
    },
    ToolsetSpec {
        name: PROJECT_CONFIG,
        description: "Tools for managing GitLab project configuration and auto-detection.",
        read: &[
            ToolSpec {
                name: "getCurrentProject",
                title: "Get Current Project",
                description: "Gets the current GitLab project configuration from the .gmcprc file in the current or parent directory.",
                params: &[],
            },
            ToolSpec {
                name: "detectProject",
                title: "Detect Project",
                description: "Auto-detects the GitLab project from the Git remote URL in the current directory.",
                params: &[],
            },
        ],
        write: &[
            ToolSpec {
                name: "setCurrentProject",
                title: "Set Current Project",
                description: "Sets the current GitLab project for this directory by creating a .gmcprc file.",
                params: &[PROJECT_ID, GITLAB_HOST],
            },
            ToolSpec {
                name: "autoDetectAndSetProject",
                title: "Auto-Detect And Set Project",
                description: "Auto-detects the GitLab project from the Git remote and creates a .gmcprc file.",
                params: &[],
            },
        ],
    },
    ToolsetSpec {
        name: PROJECTS,
        description: "Tools for interacting with GitLab projects, repositories, branches, commits, tags.",
        read: &[
            ToolSpec {
                name: "getProject",
                title: "Get Project",
                description: "Retrieves details for a specific GitLab project.",
                params: &[PROJECT_ID],
            },
            ToolSpec {
                name: "listProjects",
                title: "List Projects",
                description: "Lists GitLab projects accessible to the authenticated user.",
                params: &[
                    string("search", "Return projects matching the search criteria."),
                    boolean("owned", "Limit to projects owned by the current user."),
                    PAGE,
                    PER_PAGE,
                ],
            },
            ToolSpec {
                name: "getProjectFile",
                title: "Get Project File",
                description: "Retrieves the content of a file in a GitLab project repository.",
                params: &[
                    PROJECT_ID,
                    required(string("filePath", "Path of the file in the repository.")),
                    string("ref", "Branch, tag or commit to read from."),
                ],
            },
            ToolSpec {
                name: "listProjectFiles",
                title: "List Project Files",
                description: "Lists files and directories in a GitLab project repository.",
                params: &[
                    PROJECT_ID,
                    string("path", "Directory path inside the repository."),
                    string("ref", "Branch, tag or commit to list."),
                    boolean("recursive", "List files recursively."),
                ],
            },
            ToolSpec {
                name: "getProjectBranches",
                title: "Get Project Branches",
                description: "Retrieves the branches of a GitLab project.",
                params: &[PROJECT_ID, string("search", "Filter branches by name."), PAGE, PER_PAGE],
            },
            ToolSpec {
                name: "getProjectCommits",
                title: "Get Project Commits",
                description: "Retrieves the commits of a GitLab project.",
                params: &[
                    PROJECT_ID,
                    string("refName", "Branch or tag to list commits from."),
                    string("since", "Only commits after this ISO 8601 date."),
                    string("until", "Only commits before this ISO 8601 date."),
                    PAGE,
                    PER_PAGE,
                ],
            },
        ],
        write: &[],
    },
    ToolsetSpec {
        name: ISSUES,
        description: "Tools for CRUD operations on GitLab issues, comments, labels.",
        read: &[
            ToolSpec {
                name: "getIssue",
                title: "Get Issue",
                description: "Retrieves details for a specific GitLab issue.",
                params: &[PROJECT_ID, ISSUE_IID],
            },
            ToolSpec {
                name: "listIssues",
                title: "List Issues",
                description: "Retrieves a list of issues in a GitLab project with pagination and filtering.",
                params: &[
                    PROJECT_ID,
                    string("state", "Filter by state: opened, closed or all."),
                    string("labels", "Comma-separated list of label names."),
                    string("milestone", "Milestone title."),
                    string("search", "Search issues against their title and description."),
                    PAGE,
                    PER_PAGE,
                ],
            },
            ToolSpec {
                name: "getIssueComments",
                title: "Get Issue Comments",
                description: "Retrieves comments or notes from a specific issue in a GitLab project.",
                params: &[PROJECT_ID, ISSUE_IID, PAGE, PER_PAGE],
            },
            ToolSpec {
                name: "getIssueLabels",
                title: "Get Issue Labels",
                description: "Retrieves the labels associated with a specific GitLab issue.",
                params: &[PROJECT_ID, ISSUE_IID],
            },
            ToolSpec {
                name: "getMilestone",
                title: "Get Milestone",
                description: "Retrieves details for a specific project milestone.",
                params: &[PROJECT_ID, MILESTONE_ID],
            },
            ToolSpec {
                name: "listMilestones",
                title: "List Milestones",
                description: "Lists the milestones of a GitLab project.",
                params: &[
                    PROJECT_ID,
                    string("state", "Filter by state: active or closed."),
                    string("search", "Filter milestones by title or description."),
                    PAGE,
                    PER_PAGE,
                ],
            },
        ],
        write: &[
            ToolSpec {
                name: "createIssue",
                title: "Create Issue",
                description: "Creates a new issue in a GitLab project.",
                params: &[
                    PROJECT_ID,
                    required(string("title", "The title of the issue.")),
                    string("description", "The description of the issue."),
                    string("labels", "Comma-separated list of label names."),
                    number("milestoneId", "The ID of a milestone to assign."),
                ],
            },
            ToolSpec {
                name: "updateIssue",
                title: "Update Issue",
                description: "Updates an existing issue in a GitLab project.",
                params: &[
                    PROJECT_ID,
                    ISSUE_IID,
                    string("title", "New title."),
                    string("description", "New description."),
                    string("stateEvent", "close or reopen."),
                    string("labels", "Comma-separated list of label names."),
                ],
            },
            ToolSpec {
                name: "createIssueComment",
                title: "Create Issue Comment",
                description: "Creates a comment (note) on a specific GitLab issue.",
                params: &[PROJECT_ID, ISSUE_IID, required(string("body", "The content of the comment."))],
            },
            ToolSpec {
                name: "updateIssueComment",
                title: "Update Issue Comment",
                description: "Updates an existing comment (note) on a specific GitLab issue.",
                params: &[
                    PROJECT_ID,
                    ISSUE_IID,
                    NOTE_ID,
                    required(string("body", "The new content of the comment.")),
                ],
            },
            ToolSpec {
                name: "createMilestone",
                title: "Create Milestone",
                description: "Creates a new milestone in a GitLab project.",
                params: &[
                    PROJECT_ID,
                    required(string("title", "The title of the milestone.")),
                    string("description", "The description of the milestone."),
                    string("dueDate", "Due date in YYYY-MM-DD format."),
                    string("startDate", "Start date in YYYY-MM-DD format."),
                ],
            },
            ToolSpec {
                name: "updateMilestone",
                title: "Update Milestone",
                description: "Updates an existing milestone in a GitLab project.",
                params: &[
                    PROJECT_ID,
                    MILESTONE_ID,
                    string("title", "New title."),
                    string("description", "New description."),
                    string("stateEvent", "close or activate."),
                ],
            },
        ],
    },
    ToolsetSpec {
        name: MERGE_REQUESTS,
        description: "Tools for CRUD operations on GitLab merge requests, comments, approvals, diffs.",
        read: &[
            ToolSpec {
                name: "getMergeRequest",
                title: "Get Merge Request",
                description: "Retrieves details for a specific merge request.",
                params: &[PROJECT_ID, MR_IID],
            },
            ToolSpec {
                name: "listMergeRequests",
                title: "List Merge Requests",
                description: "Lists merge requests for a GitLab project with filtering and pagination options.",
                params: &[
                    PROJECT_ID,
                    string("state", "Filter by state: opened, closed, merged or all."),
                    string("targetBranch", "Filter by target branch."),
                    string("sourceBranch", "Filter by source branch."),
                    PAGE,
                    PER_PAGE,
                ],
            },
            ToolSpec {
                name: "getMergeRequestComments",
                title: "Get Merge Request Comments",
                description: "Retrieves comments or notes from a specific merge request.",
                params: &[PROJECT_ID, MR_IID, PAGE, PER_PAGE],
            },
        ],
        write: &[
            ToolSpec {
                name: "createMergeRequest",
                title: "Create Merge Request",
                description: "Creates a new merge request in a GitLab project.",
                params: &[
                    PROJECT_ID,
                    required(string("sourceBranch", "The source branch.")),
                    required(string("targetBranch", "The target branch.")),
                    required(string("title", "The title of the merge request.")),
                    string("description", "The description of the merge request."),
                    boolean("removeSourceBranch", "Delete the source branch after merging."),
                ],
            },
            ToolSpec {
                name: "updateMergeRequest",
                title: "Update Merge Request",
                description: "Updates an existing merge request in a GitLab project.",
                params: &[
                    PROJECT_ID,
                    MR_IID,
                    string("title", "New title."),
                    string("description", "New description."),
                    string("targetBranch", "New target branch."),
                    string("stateEvent", "close or reopen."),
                ],
            },
            ToolSpec {
                name: "createMergeRequestComment",
                title: "Create Merge Request Comment",
                description: "Creates a comment (note) on a specific merge request.",
                params: &[PROJECT_ID, MR_IID, required(string("body", "The content of the comment."))],
            },
            ToolSpec {
                name: "updateMergeRequestComment",
                title: "Update Merge Request Comment",
                description: "Updates an existing comment (note) on a specific merge request.",
                params: &[
                    PROJECT_ID,
                    MR_IID,
                    NOTE_ID,
                    required(string("body", "The new content of the comment.")),
                ],
            },
        ],
    },
    ToolsetSpec {
        name: SECURITY,
        description: "Tools for accessing GitLab security scan results (SAST, DAST, etc.).",
        read: &[],
        write: &[],
    },
    ToolsetSpec {
        name: USERS,
        description: "Tools for looking up GitLab user information.",
        read: &[],
        write: &[],
    },
    ToolsetSpec {
        name: SEARCH,
        description: "Tools for utilizing GitLab's scoped search capabilities.",
        read: &[],
        write: &[],
    },
];

/// Returns the catalog's toolset names in registration order.
#[must_use]
pub fn toolset_names() -> Vec<&'static str> {
    CATALOG.iter().map(|spec| spec.name).collect()
}

impl ParamSpec {
    fn to_parameter(&self) -> ToolParameter {
        let parameter = ToolParameter::new(self.name, self.kind, self.description);
        if self.required { parameter.required() } else { parameter }
    }
}

impl ToolSpec {
    fn descriptor(&self, kind: ToolKind) -> CatalogResult<ToolDescriptor> {
        let descriptor = ToolDescriptor::new(ToolName::new(self.name)?, kind, self.description)?.with_title(self.title);
        Ok(self
            .params
            .iter()
            .map(ParamSpec::to_parameter)
            .fold(descriptor, ToolDescriptor::with_parameter))
    }

    fn server_tool(&self, kind: ToolKind, backend: &Arc<dyn GitLabBackend>) -> CatalogResult<ServerTool> {
        let descriptor = self.descriptor(kind)?;
        let handler = BackendTool::new(&descriptor, Arc::clone(backend));
        Ok(ServerTool::new(descriptor, handler))
    }
}

impl ToolsetSpec {
    pub(crate) fn build(&self, backend: &Arc<dyn GitLabBackend>) -> CatalogResult<Toolset> {
        let read = self
            .read
            .iter()
            .map(|spec| spec.server_tool(ToolKind::Read, backend))
            .collect::<CatalogResult<Vec<_>>>()?;
        let write = self
            .write
            .iter()
            .map(|spec| spec.server_tool(ToolKind::Write, backend))
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(Toolset::new(ToolsetName::new(self.name)?, self.description)
            .with_read_tools(read)
            .with_write_tools(write))
    }
}
