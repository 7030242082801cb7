<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Delete action button</description>
   <name>btn_Delete</name>
   <tag></tag>
   <elementGuidId>review-delete-button</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[contains(text(), 'Delete') or @aria-label='Delete']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='delete-button'], button[aria-label='Delete']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
