//! SQL statements for the `materials` table.
//!
//! Every statement is fixed text. Column names are aliased to the field
//! names of [`Material`](crate::model::Material) so rows decode with
//! `FromRow` directly.

pub const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS materials (
    id SERIAL PRIMARY KEY,
    nome TEXT NOT NULL,
    descricao TEXT NOT NULL,
    data_criacao TIMESTAMP DEFAULT NOW(),
    data_atualizacao TIMESTAMP DEFAULT NOW()
)";

pub const SELECT_ALL: &str = "\
SELECT id, nome AS name, descricao AS description, \
data_criacao AS created_at, data_atualizacao AS updated_at \
FROM materials ORDER BY id";

pub const SELECT_BY_ID: &str = "\
SELECT id, nome AS name, descricao AS description, \
data_criacao AS created_at, data_atualizacao AS updated_at \
FROM materials WHERE id = $1";

pub const INSERT: &str = "\
INSERT INTO materials (nome, descricao) VALUES ($1, $2) \
RETURNING id, nome AS name, descricao AS description, \
data_criacao AS created_at, data_atualizacao AS updated_at";

/// Absent patch fields bind as NULL and keep the stored value.
pub const UPDATE: &str = "\
UPDATE materials SET \
nome = COALESCE($1, nome), \
descricao = COALESCE($2, descricao), \
data_atualizacao = CURRENT_TIMESTAMP \
WHERE id = $3 \
RETURNING id, nome AS name, descricao AS description, \
data_criacao AS created_at, data_atualizacao AS updated_at";

pub const DELETE: &str = "DELETE FROM materials WHERE id = $1";
