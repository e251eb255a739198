//! Empty page template: minimal header/content starter

/// Single-file page body with a header row and a placeholder content card.
pub const PAGE_TSX: &str = r#"'use client'

import { Stack, Text, Card, Button } from '@/components/ui'

/*
 * ===========================================
 * {{title_upper}}
 * ===========================================
 */

export default function {{component_name}}Page() {
  return (
    <div className="max-w-6xl mx-auto px-6 py-8">
      <Stack spacing="lg">

        {/* Header */}
        <Stack direction="horizontal" justify="between" align="center">
          <Stack spacing="xs">
            <Text variant="headline-1">{{title}}</Text>
            <Text variant="body-2" color="secondary">
              Page description
            </Text>
          </Stack>
          <Button variant="primary">Action</Button>
        </Stack>

        <Card padding="lg">
          <div className="h-64 flex items-center justify-center border-2 border-dashed border-border-subtle rounded-lg">
            <Text variant="body-1" color="secondary">Content goes here</Text>
          </div>
        </Card>

      </Stack>
    </div>
  )
}
"#;
